use anyhow::Result;
use csv_geocoder::app::ports::GeocodeProviderPort;
use csv_geocoder::config::Config;
use csv_geocoder::error::LookupError;
use csv_geocoder::infra::http_client::ReqwestGeocodeProvider;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve one canned HTTP response and hand back the request line.
async fn serve_once(status: &'static str, body: &'static str) -> Result<(String, JoinHandle<String>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let url = format!("http://{}/search", listener.local_addr()?);

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        let text = String::from_utf8_lossy(&request).to_string();
        text.lines().next().unwrap_or_default().to_string()
    });
    Ok((url, handle))
}

fn config_for(url: String) -> Config {
    Config {
        base_url: url,
        api_key: Some("test-key".to_string()),
        ..Config::default()
    }
}

#[tokio::test]
async fn sends_query_and_key() -> Result<()> {
    let (url, server) = serve_once(
        "200 OK",
        r#"[{"importance":0.2,"display_name":"1 Main St, Springfield","class":"highway","lat":"39.1","lon":"-89.6"}]"#,
    )
    .await?;
    let provider = ReqwestGeocodeProvider::new(&config_for(url))?;

    let candidates = provider.search("1 Main St, Springfield").await?;
    let request_line = server.await?;

    assert!(request_line.starts_with("GET /search?"));
    assert!(request_line.contains("q=1+Main+St%2C+Springfield"));
    assert!(request_line.contains("api_key=test-key"));
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].coordinates().lon, "-89.6");
    Ok(())
}

#[tokio::test]
async fn error_status_is_reported() -> Result<()> {
    let (url, server) = serve_once("401 Unauthorized", r#"{"error":"Invalid API key"}"#).await?;
    let provider = ReqwestGeocodeProvider::new(&config_for(url))?;

    let err = provider.search("1 Main St").await.unwrap_err();
    server.await?;

    assert!(matches!(err, LookupError::Status(401)));
    Ok(())
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() -> Result<()> {
    // bind then drop to get a port nobody is listening on
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let url = format!("http://{}/search", listener.local_addr()?);
    drop(listener);
    let provider = ReqwestGeocodeProvider::new(&config_for(url))?;

    let err = provider.search("1 Main St").await.unwrap_err();
    assert!(matches!(err, LookupError::Transport(_)));
    Ok(())
}
