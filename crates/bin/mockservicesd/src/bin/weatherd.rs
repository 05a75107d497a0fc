//! `weatherd` — runs the weather service.

use mockservices_domain::service::ServiceKind;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    mockservicesd::run(ServiceKind::Weather).await?;
    Ok(())
}
