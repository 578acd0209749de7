//! 请求指标
//!
//! 每个请求记录计数与耗时，`/metrics` 以 Prometheus 文本格式输出。

use axum::{extract::Request, middleware::Next, response::Response};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::warn;

pub const REQUESTS_TOTAL: &str = "http_requests_total";
pub const REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";

static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// 全局 recorder 只安装一次，之后返回同一个句柄
pub fn prometheus_handle() -> PrometheusHandle {
    HANDLE
        .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => handle,
            Err(e) => {
                warn!("Failed to install metrics recorder: {}", e);
                PrometheusBuilder::new().build_recorder().handle()
            }
        })
        .clone()
}

/// 请求指标中间件，url 标签不含查询串
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let url = req.uri().path().to_string();

    let response = next.run(req).await;

    let code = response.status().as_u16().to_string();
    metrics::counter!(
        REQUESTS_TOTAL,
        "method" => method.clone(),
        "url" => url.clone(),
        "code" => code.clone()
    )
    .increment(1);
    metrics::histogram!(
        REQUEST_DURATION_SECONDS,
        "method" => method,
        "url" => url,
        "code" => code
    )
    .record(start.elapsed().as_secs_f64());

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_is_installed_once() {
        let first = prometheus_handle();
        let second = prometheus_handle();

        metrics::counter!(REQUESTS_TOTAL, "method" => "GET", "url" => "/unit", "code" => "200")
            .increment(2);

        let rendered = second.render();
        assert!(rendered.contains(REQUESTS_TOTAL));
        assert!(rendered.contains("url=\"/unit\""));
        assert!(first.render().contains("/unit"));
    }
}
