// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

/// 启动 Prometheus 导出器并注册指标说明
pub fn init_metrics(address: &str) {
    let addr: SocketAddr = match address.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address {}: {}. Metrics disabled.", address, e);
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    describe_metrics();
    info!("Metrics exporter listening on {}", addr);
}

fn describe_metrics() {
    describe_counter!(
        "leadrs_lead_search_total",
        "Lead searches served, labelled by whether the cache answered"
    );
    describe_counter!(
        "leadrs_engine_failures_total",
        "Search engine calls that failed or timed out"
    );
    describe_counter!(
        "leadrs_cache_write_failures_total",
        "Lead cache writes that failed and were dropped"
    );
    describe_histogram!(
        "leadrs_lead_search_duration_seconds",
        "End-to-end lead search duration in seconds"
    );
    describe_counter!(
        "leadrs_reddit_requests_skipped_total",
        "Reddit subreddit/keyword requests skipped after an error"
    );
}
