//! Auth DTOs

use serde::{Deserialize, Serialize};

/// Request body for `POST /platform/auth/{ref}/magiclink`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMagicLink {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_magic_link_body() {
        let body = SendMagicLink {
            email: "ada@example.com".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "email": "ada@example.com" }));
    }
}
