//! Conversion from core errors to MCP protocol errors.

use ghost_content_core::Error;

use crate::model::ErrorData;

/// Extension trait converting domain errors into `ErrorData`.
pub trait McpErrorExt {
    /// Convert into an MCP protocol error.
    fn to_mcp_error(self) -> ErrorData;
}

impl McpErrorExt for Error {
    fn to_mcp_error(self) -> ErrorData {
        match self {
            Error::InvalidParams(msg) => ErrorData::invalid_params(msg, None),
            Error::NotFound(msg) => ErrorData::invalid_params(format!("not found: {msg}"), None),
            // Config, transport, upstream, and serialization failures
            // all surface with their message intact.
            other => ErrorData::internal_error(other.to_string(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_params_maps_to_invalid_params() {
        let err = Error::invalid_params("id must not be empty").to_mcp_error();
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("id must not be empty"));
    }

    #[test]
    fn test_upstream_error_keeps_status_and_message() {
        let err = Error::api(404, "Post not found.").to_mcp_error();
        assert_eq!(err.code, rmcp::model::ErrorCode::INTERNAL_ERROR);
        assert!(err.message.contains("404"));
        assert!(err.message.contains("Post not found."));
    }
}
