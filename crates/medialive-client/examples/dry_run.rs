//! Marshals a few MediaLive calls and prints the requests instead of sending them.
//!
//! ```text
//! AWS_REGION=us-west-2 cargo run -p medialive-client --example dry_run
//! LOG_FORMAT=json MEDIALIVE_VALIDATE_REQUESTS=true cargo run -p medialive-client --example dry_run
//! ```

use async_trait::async_trait;
use medialive_client::{
    ClientConfig, HttpRequest, HttpResponse, MediaLiveClient, Transport, TransportError,
};
use medialive_models::operations::{
    BatchUpdateScheduleRequest, DeleteTagsRequest, ListChannelsRequest,
};
use medialive_models::schedule::{
    InputSwitchScheduleActionSettings, ScheduleAction, ScheduleActionStartSettings,
};
use medialive_models::ScheduleActionSettings;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Prints each request and answers with an empty success.
struct DryRunTransport;

#[async_trait]
impl Transport for DryRunTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        println!("{} {}", request.method, request.url);
        for (name, value) in &request.headers {
            println!("  {}: {}", name, value);
        }
        if let Some(body) = &request.body {
            println!("  {}", body);
        }
        println!();
        Ok(HttpResponse::new(200, "{}"))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env().add_directive("medialive_client=debug".parse()?);

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(true).with_target(true))
            .with(env_filter)
            .init();
    }

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(_) => ClientConfig::for_region("us-west-2")?,
    };
    info!(endpoint = %config.endpoint, validate = config.validate_requests, "Dry run");

    let client = MediaLiveClient::new(config, DryRunTransport);

    client
        .list_channels(ListChannelsRequest::new().with_max_results(20))
        .await?;

    let switch = ScheduleAction::new()
        .with_action_name("switch-to-backup")
        .with_schedule_action_start_settings(ScheduleActionStartSettings::immediate())
        .with_schedule_action_settings(ScheduleActionSettings::from(
            InputSwitchScheduleActionSettings::new()
                .with_input_attachment_name_reference("backup-feed"),
        ));
    client
        .batch_update_schedule(
            BatchUpdateScheduleRequest::new()
                .with_channel_id("8675309")
                .create(switch)
                .delete("switch-to-primary"),
        )
        .await?;

    client
        .delete_tags(
            DeleteTagsRequest::new()
                .with_resource_arn("arn:aws:medialive:us-west-2:123456789012:channel:8675309")
                .push_tag_key("env"),
        )
        .await?;

    Ok(())
}
