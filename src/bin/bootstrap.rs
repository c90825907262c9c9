use hello_world_lambda::{handler, logging};
use lambda_runtime::{service_fn, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init(log::LevelFilter::Info)?;
    lambda_runtime::run(service_fn(handler)).await
}
