use casedesk::{BaseUrlConfig, CaseApi, HTTPClient, resolve_base_url};
use casedesk::{error, fatal, info, warn};
use std::sync::Arc;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() {
    let config = BaseUrlConfig::from_env();
    let base_url = match resolve_base_url(&config) {
        Ok(url) => url,
        Err(err) => fatal!("Could not resolve backend base URL: {err}"),
    };
    info!("Using backend base URL {base_url}");

    let client = Arc::new(HTTPClient::new(&base_url));
    let api = CaseApi::new(Arc::clone(&client));

    let cases = match api.list_cases().await {
        Ok(cases) => cases,
        Err(err) => {
            error!("Listing cases failed: {err}");
            report_failures(&client).await;
            return;
        }
    };
    info!("Fetched {} cases", cases.len());
    for case in &cases {
        info!(
            "{} | {} | {} attachment(s) | {}",
            case.case_id(),
            case.company(),
            case.attachments(),
            case.email_excerpt()
        );
    }

    if let Some(first) = cases.first() {
        match api.get_case(first.case_id()).await {
            Ok(detail) => {
                info!(
                    "Detail for {}: {} bytes of email body",
                    detail.case_id(),
                    detail.email_body().len()
                );
                for attachment in detail.attachments() {
                    info!(
                        "  {} ({}) -> {}",
                        attachment.label(),
                        attachment.kind(),
                        attachment.download_url()
                    );
                }
            }
            Err(err) => error!("Fetching case {} failed: {err}", first.case_id()),
        }
    }

    report_failures(&client).await;
}

async fn report_failures(client: &HTTPClient) {
    for failure in client.failures().await {
        warn!(
            "Recorded failure at {}: {} {} {}",
            failure.recorded_at().format("%H:%M:%S"),
            failure.endpoint(),
            failure.status().map_or_else(|| "-".to_string(), |s| s.to_string()),
            failure.body()
        );
    }
}
