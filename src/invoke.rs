//! In-process invocation of [`handler`](crate::handler) for local runs.

use crate::config::Config;
use crate::handler::handler;
use crate::response::Response;
use lambda_runtime::{Context, LambdaEvent};
use serde_json::Value;
use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

pub const LOCAL_REQUEST_ID: &str = "00000000-0000-0000-0000-000000000000";

type BoxError = Box<dyn Error + Send + Sync>;

/// Where the local invoker takes its event from
#[derive(Debug, Clone, PartialEq)]
pub enum EventSource {
    Null,
    Inline(String),
    File(PathBuf),
    Stdin,
    Named(String),
}

impl EventSource {
    pub fn read(&self, config: &Config) -> Result<Value, BoxError> {
        let text = match self {
            EventSource::Null => return Ok(Value::Null),
            EventSource::Inline(json) => json.clone(),
            EventSource::File(path) => read_file(path)?,
            EventSource::Stdin => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            }
            EventSource::Named(name) => read_file(&config.event_path(name)?)?,
        };
        serde_json::from_str(&text).map_err(|e| format!("event is not valid JSON: {}", e).into())
    }
}

fn read_file(path: &Path) -> Result<String, BoxError> {
    fs::read_to_string(path).map_err(|e| format!("can't read {}: {}", path.display(), e).into())
}

pub fn local_context(request_id: &str) -> Context {
    let mut context = Context::default();
    context.request_id = request_id.to_owned();
    context
}

/// Runs `times` concurrent invocations with the same event and returns the
/// response once every invocation has produced byte-identical output.
/// `times` must be at least 1.
pub async fn invoke(event: Value, request_id: &str, times: usize) -> Result<Response, BoxError> {
    let tasks: Vec<_> = (0..times)
        .map(|i| {
            let id = if i == 0 {
                request_id.to_owned()
            } else {
                format!("{}-{}", request_id, i)
            };
            let event = LambdaEvent::new(event.clone(), local_context(&id));
            tokio::spawn(handler(event))
        })
        .collect();

    let mut first: Option<(Response, Vec<u8>)> = None;
    for (i, task) in tasks.into_iter().enumerate() {
        let res = task.await??;
        let bytes = serde_json::to_vec(&res)?;
        if let Some((_, expected)) = &first {
            if *expected != bytes {
                return Err(format!("invocation {} diverged from the first response", i).into());
            }
        } else {
            first = Some((res, bytes));
        }
    }

    log::info!("{} invocation(s) completed", times);
    first
        .map(|(res, _)| res)
        .ok_or_else(|| "no invocation ran".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_source() {
        let event = EventSource::Null.read(&Config::default()).unwrap();
        assert_eq!(event, Value::Null);
    }

    #[test]
    fn inline_source() {
        let event = EventSource::Inline(r#"{"foo":"bar"}"#.into())
            .read(&Config::default())
            .unwrap();
        assert_eq!(event, json!({ "foo": "bar" }));
    }

    #[test]
    fn malformed_inline_source() {
        let err = EventSource::Inline("{foo".into())
            .read(&Config::default())
            .unwrap_err();
        assert!(err.to_string().starts_with("event is not valid JSON"));
    }

    #[test]
    fn named_source_reads_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("events")).unwrap();
        fs::write(dir.path().join("events/ping.json"), r#"{"ping":true}"#).unwrap();
        let config = Config::parse("[events]\nping = \"events/ping.json\"", dir.path()).unwrap();

        let event = EventSource::Named("ping".into()).read(&config).unwrap();
        assert_eq!(event, json!({ "ping": true }));
    }

    #[test]
    fn missing_file_source() {
        let source = EventSource::File(Path::new("/definitely/not/here.json").to_owned());
        assert!(source.read(&Config::default()).is_err());
    }

    #[tokio::test]
    async fn invoke_once() {
        let res = invoke(json!({}), LOCAL_REQUEST_ID, 1).await.unwrap();
        assert_eq!(res, Response::hello_world());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn invoke_many_times() {
        let res = invoke(json!({ "nested": { "a": 1 } }), "req", 100)
            .await
            .unwrap();
        assert_eq!(res, Response::hello_world());
    }

    #[tokio::test]
    async fn zero_times_is_an_error() {
        let err = invoke(Value::Null, "req", 0).await.unwrap_err();
        assert_eq!(err.to_string(), "no invocation ran");
    }
}
