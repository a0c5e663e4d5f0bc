use ipapi_rs::IpApi;

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::FmtSubscriber;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

#[tokio::main]
async fn main() {
    #[cfg(feature = "tracing")]
    init_tracing();

    let access_key = std::env::var("IPAPI_ACCESS_KEY").unwrap_or_else(|_| "YOUR_ACCESS_KEY".into());
    let ipapi = IpApi::init(&access_key, None).expect("failed to build ipapi client");

    for ip in ["8.8.8.8", "2001:4860:4860:0000:0000:0000:0000:8888"] {
        match ipapi.lookup(ip).await {
            Ok(result) => println!(
                "{ip}: {}, {} ({:?}, {:?})",
                result.city.unwrap_or_default(),
                result.country_name.unwrap_or_default(),
                result.latitude,
                result.longitude,
            ),
            Err(e) => eprintln!("{ip}: {e}"),
        }
    }
}
