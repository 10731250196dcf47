//! Helpers shared by the unit tests.

use actix_web::{http::StatusCode, web, App, HttpResponse, HttpServer};
use tokio::sync::oneshot;

/// HTTP server answering every request with the same status and body.
///
/// Unlike `wiremock`, it can answer with the non-standard statuses used by Secupay (442, 542).
pub(crate) struct CannedServer {
    uri: String,
    shutdown: Option<oneshot::Sender<()>>,
}

impl CannedServer {
    pub(crate) async fn start(status: u16, content_type: &'static str, body: &'static str) -> Self {
        let status = StatusCode::from_u16(status).unwrap();

        let http_server_factory = HttpServer::new(move || {
            App::new().default_service(web::to(move || async move {
                HttpResponse::build(status)
                    .content_type(content_type)
                    .body(body)
            }))
        })
        .workers(1)
        .bind("127.0.0.1:0")
        .unwrap();
        let addr = http_server_factory.addrs().first().cloned().unwrap();

        let (shutdown_sender, shutdown_recv) = oneshot::channel();
        let http_server = http_server_factory.run();
        tokio::spawn(async move {
            tokio::select! {
                _ = http_server => panic!("HTTP server crashed"),
                _ = shutdown_recv => {}
            }
        });

        Self {
            uri: format!("http://{}", addr),
            shutdown: Some(shutdown_sender),
        }
    }

    pub(crate) fn uri(&self) -> &str {
        &self.uri
    }
}

impl Drop for CannedServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}
