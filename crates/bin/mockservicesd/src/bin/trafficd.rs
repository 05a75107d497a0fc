//! `trafficd` — runs the traffic service.

use mockservices_domain::service::ServiceKind;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    mockservicesd::run(ServiceKind::Traffic).await?;
    Ok(())
}
