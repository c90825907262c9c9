use hello_world_lambda::config::Config;
use hello_world_lambda::invoke::{self, EventSource};
use hello_world_lambda::logging;
use log::LevelFilter;
use std::path::PathBuf;
use std::process;
use structopt::StructOpt;

/// Invokes the hello-world Lambda handler locally and prints its response
#[derive(StructOpt, Debug)]
struct Opt {
    /// Event as inline JSON (e.g. '{"foo":"bar"}')
    #[structopt(long, conflicts_with_all = &["event-file", "event-name"])]
    event: Option<String>,
    /// Read the event from a JSON file, `-` for stdin
    #[structopt(long, parse(from_os_str), conflicts_with = "event-name")]
    event_file: Option<PathBuf>,
    /// Use an event from table [events] in Lambda.toml
    #[structopt(long)]
    event_name: Option<String>,
    /// Config file (defaults to Lambda.toml in the current directory, if present)
    #[structopt(long, parse(from_os_str))]
    config: Option<PathBuf>,
    /// Request id placed in the invocation context
    #[structopt(long, default_value = invoke::LOCAL_REQUEST_ID)]
    request_id: String,
    /// Print the response as a raw HTTP message instead of JSON
    #[structopt(long)]
    wire: bool,
    /// Invoke this many times concurrently and check the responses match
    #[structopt(long, default_value = "1", validator = at_least_one)]
    times: usize,
    /// Log at debug level
    #[structopt(short, long)]
    verbose: bool,
}

impl Opt {
    fn event_source(&self) -> EventSource {
        match (&self.event, &self.event_file, &self.event_name) {
            (Some(json), _, _) => EventSource::Inline(json.clone()),
            (_, Some(path), _) if path.as_os_str() == "-" => EventSource::Stdin,
            (_, Some(path), _) => EventSource::File(path.clone()),
            (_, _, Some(name)) => EventSource::Named(name.clone()),
            _ => EventSource::Null,
        }
    }
}

fn at_least_one(value: String) -> Result<(), String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_owned()),
        Ok(_) => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

fn fail<E: std::fmt::Display>(what: &str, e: E) -> ! {
    eprintln!("{}: {}", what, e);
    process::exit(1);
}

#[tokio::main]
async fn main() {
    let opt = Opt::from_args();

    let config = Config::discover(opt.config.as_deref())
        .unwrap_or_else(|e| fail("Failed to load config", e));

    let level = if opt.verbose {
        LevelFilter::Debug
    } else {
        config.logging.level.unwrap_or(LevelFilter::Info)
    };
    if let Err(e) = logging::init(level) {
        fail("Failed to init logger", e);
    }

    let event = opt
        .event_source()
        .read(&config)
        .unwrap_or_else(|e| fail("Failed to read event", e));

    let res = invoke::invoke(event, &opt.request_id, opt.times)
        .await
        .unwrap_or_else(|e| fail("Invocation failed", e));

    if opt.wire {
        println!("{}", res);
    } else {
        match serde_json::to_string_pretty(&res) {
            Ok(json) => println!("{}", json),
            Err(e) => fail("Failed to serialize response", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(args: &[&str]) -> Opt {
        let mut argv = vec!["hello-world-lambda"];
        argv.extend_from_slice(args);
        Opt::from_iter(argv)
    }

    #[test]
    fn defaults() {
        let opt = opt(&[]);
        assert_eq!(opt.event_source(), EventSource::Null);
        assert_eq!(opt.request_id, invoke::LOCAL_REQUEST_ID);
        assert_eq!(opt.times, 1);
        assert!(!opt.wire);
    }

    #[test]
    fn event_sources() {
        assert_eq!(
            opt(&["--event", "{}"]).event_source(),
            EventSource::Inline("{}".into())
        );
        assert_eq!(opt(&["--event-file", "-"]).event_source(), EventSource::Stdin);
        assert_eq!(
            opt(&["--event-file", "ev.json"]).event_source(),
            EventSource::File("ev.json".into())
        );
        assert_eq!(
            opt(&["--event-name", "ping"]).event_source(),
            EventSource::Named("ping".into())
        );
    }

    #[test]
    fn times_must_be_positive() {
        assert!(Opt::from_iter_safe(&["hello-world-lambda", "--times", "0"]).is_err());
        assert_eq!(opt(&["--times", "3"]).times, 3);
    }

    #[test]
    fn event_options_conflict() {
        let res = Opt::from_iter_safe(&["hello-world-lambda", "--event", "{}", "--event-name", "x"]);
        assert!(res.is_err());
    }
}
