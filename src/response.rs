use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub const STATUS_OK: u16 = 200;
pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";
pub const GREETING: &str = "hello-world";

/// Payload serialized into the response body
#[derive(Serialize, Debug)]
struct Message {
    message: &'static str,
}

/// HTTP-shaped result handed back to the Lambda runtime
/// (the API Gateway proxy integration shape)
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub body: String,
    pub headers: BTreeMap<String, String>,
}

impl Response {
    /// The one response this function ever gives.
    pub fn hello_world() -> Response {
        let body = serde_json::to_string(&Message { message: GREETING })
            .unwrap_or_else(|_| format!(r#"{{"message":"{}"}}"#, GREETING));

        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_TYPE.to_owned(), APPLICATION_JSON.to_owned());

        Response {
            status_code: STATUS_OK,
            body,
            headers,
        }
    }
}

/// Wire-level rendering, as an HTTP gateway would emit it
impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HTTP/1.1 {}", self.status_code)?;
        for (name, value) in &self.headers {
            writeln!(f, "{}: {}", name, value)?;
        }
        writeln!(f)?;
        write!(f, "{}", self.body)
    }
}
