//! # Canonical Log Line ミドルウェア
//!
//! HTTP リクエスト完了時に、そのリクエストの要点を 1 行にまとめた
//! サマリログ（Canonical Log Line）を出力する tower Layer。
//!
//! ## TraceLayer との責務分離
//!
//! - TraceLayer: リクエストスパン（method, uri, request_id）の作成
//! - CanonicalLogLineLayer: 完了サマリ（method, path, status, latency）の出力
//!
//! TraceLayer の内側に配置することで、スパンフィールドがログに自動的に含まれる。
//!
//! ```text
//! SetRequestIdLayer → TraceLayer → CanonicalLogLineLayer → handler
//! ```

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Instant,
};

use http::{Request, Response};
use tower::{Layer, Service};

/// サマリログを出力しない死活監視パス
///
/// ロードバランサーやオーケストレーターから高頻度で叩かれるため除外する。
const PROBE_PATHS: [&str; 2] = ["/ping", "/healthz"];

fn is_probe_path(path: &str) -> bool {
    PROBE_PATHS.contains(&path)
}

/// Canonical Log Line を出力する Layer
///
/// 完了時に INFO レベルで `log.type = "canonical"` 付きのログを出力する。
/// 下位サービスがエラーを返した場合は ERROR レベルで出力する。
#[derive(Clone, Copy, Debug, Default)]
pub struct CanonicalLogLineLayer;

impl<S> Layer<S> for CanonicalLogLineLayer {
    type Service = CanonicalLogLineService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CanonicalLogLineService { inner }
    }
}

/// [`CanonicalLogLineLayer`] が生成する Service
#[derive(Clone, Debug)]
pub struct CanonicalLogLineService<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for CanonicalLogLineService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: std::fmt::Display + 'static,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;
    type Response = S::Response;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        // clone-swap: poll_ready 済みの inner を使う
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        if is_probe_path(req.uri().path()) {
            return Box::pin(inner.call(req));
        }

        let method = req.method().to_string();
        let path = req.uri().path().to_owned();
        let start = Instant::now();

        Box::pin(async move {
            let result = inner.call(req).await;
            let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

            match &result {
                Ok(response) => {
                    tracing::info!(
                        log.r#type = "canonical",
                        http.method = %method,
                        http.path = %path,
                        http.status_code = response.status().as_u16(),
                        http.latency_ms = latency_ms,
                        "リクエスト完了"
                    );
                }
                Err(err) => {
                    tracing::error!(
                        log.r#type = "canonical",
                        http.method = %method,
                        http.path = %path,
                        http.latency_ms = latency_ms,
                        error.message = %err,
                        "リクエスト処理エラー"
                    );
                }
            }

            result
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        convert::Infallible,
        sync::{Arc, Mutex},
    };

    use pretty_assertions::assert_eq;
    use tracing_subscriber::layer::SubscriberExt;

    use super::*;

    /// 固定ステータスを返すダミー Service
    #[derive(Clone)]
    struct StatusService(http::StatusCode);

    impl Service<Request<()>> for StatusService {
        type Error = Infallible;
        type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;
        type Response = Response<()>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, _req: Request<()>) -> Self::Future {
            let status = self.0;
            Box::pin(async move { Ok(Response::builder().status(status).body(()).unwrap()) })
        }
    }

    /// 常にエラーを返すダミー Service
    #[derive(Clone)]
    struct FailingService;

    impl Service<Request<()>> for FailingService {
        type Error = String;
        type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;
        type Response = Response<()>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, _req: Request<()>) -> Self::Future {
            Box::pin(async { Err("boom".to_string()) })
        }
    }

    #[derive(Debug, Clone)]
    struct Captured {
        level:  tracing::Level,
        fields: HashMap<String, String>,
    }

    /// イベントのフィールドを文字列化して保存する Layer
    #[derive(Clone, Default)]
    struct CaptureLayer {
        events: Arc<Mutex<Vec<Captured>>>,
    }

    struct FieldVisitor<'a>(&'a mut HashMap<String, String>);

    impl tracing::field::Visit for FieldVisitor<'_> {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            self.0.insert(field.name().to_string(), format!("{value:?}"));
        }

        fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
            self.0.insert(field.name().to_string(), value.to_string());
        }

        fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
            self.0.insert(field.name().to_string(), value.to_string());
        }
    }

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for CaptureLayer {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            let mut fields = HashMap::new();
            event.record(&mut FieldVisitor(&mut fields));
            self.events.lock().unwrap().push(Captured {
                level: *event.metadata().level(),
                fields,
            });
        }
    }

    /// `path` へのリクエストを `service` に通し、出力されたイベントを返す
    async fn run<S>(service: S, method: http::Method, path: &str) -> Vec<Captured>
    where
        S: Service<Request<()>, Response = Response<()>> + Clone + Send + 'static,
        S::Future: Send + 'static,
        S::Error: std::fmt::Display + 'static,
    {
        let capture = CaptureLayer::default();
        let events = capture.events.clone();
        let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(capture));

        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(())
            .unwrap();
        let _ = CanonicalLogLineLayer.layer(service).call(request).await;

        events.lock().unwrap().clone()
    }

    #[test]
    fn test_死活監視パスの判定() {
        assert!(is_probe_path("/ping"));
        assert!(is_probe_path("/healthz"));
        assert!(!is_probe_path("/"));
        assert!(!is_probe_path("/factorize/360"));
        assert!(!is_probe_path("/jamo/decompose"));
    }

    #[tokio::test]
    async fn test_正常リクエストでinfoのサマリが1行出力される() {
        let events = run(
            StatusService(http::StatusCode::OK),
            http::Method::GET,
            "/factorize/360",
        )
        .await;

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.level, tracing::Level::INFO);
        assert_eq!(event.fields["message"], "リクエスト完了");
        assert_eq!(event.fields["log.type"], "canonical");
        assert_eq!(event.fields["http.method"], "GET");
        assert_eq!(event.fields["http.path"], "/factorize/360");
        assert_eq!(event.fields["http.status_code"], "200");
        assert!(event.fields.contains_key("http.latency_ms"));
    }

    #[tokio::test]
    async fn test_クライアントエラーのステータスも記録される() {
        let events = run(
            StatusService(http::StatusCode::BAD_REQUEST),
            http::Method::POST,
            "/jamo/decompose/batch",
        )
        .await;

        assert_eq!(events[0].fields["http.method"], "POST");
        assert_eq!(events[0].fields["http.status_code"], "400");
    }

    #[tokio::test]
    async fn test_死活監視パスではサマリを出力しない() {
        for path in PROBE_PATHS {
            let events = run(StatusService(http::StatusCode::OK), http::Method::GET, path).await;
            assert!(events.is_empty(), "{path} ではログが出力されないこと");
        }
    }

    #[tokio::test]
    async fn test_serviceエラー時はerrorレベルで出力される() {
        let events = run(FailingService, http::Method::GET, "/").await;

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, tracing::Level::ERROR);
        assert_eq!(events[0].fields["message"], "リクエスト処理エラー");
        assert_eq!(events[0].fields["error.message"], "boom");
    }

    #[tokio::test]
    async fn test_レスポンスは透過的に返される() {
        let mut sut = CanonicalLogLineLayer.layer(StatusService(http::StatusCode::NOT_FOUND));
        let request = Request::builder().uri("/unknown").body(()).unwrap();

        let response = sut.call(request).await.unwrap();

        assert_eq!(response.status(), http::StatusCode::NOT_FOUND);
    }
}
