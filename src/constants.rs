//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default endpoint for listing and creating posts
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Default HTTP request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Author id assigned to new drafts
pub const DEFAULT_USER_ID: u64 = 1;

/// Header value sent with every create request
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Config directory under the user's home
pub const CONFIG_DIR_NAME: &str = ".postboard";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Log file written in the working directory
pub const LOG_FILE_NAME: &str = "postboard.log";

// User-facing messages

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load posts. Please try again.";
pub const CREATE_FAILED_MESSAGE: &str = "Failed to add post. Please try again.";
pub const VALIDATION_MESSAGE: &str = "Title and body are required";
