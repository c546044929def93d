// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::conversation_repository::ConversationRepository;
use crate::domain::repositories::project_repository::ProjectRepository;
use crate::domain::services::conversation_discovery_service::ConversationDiscoveryService;
use crate::domain::services::lead_search_service::LeadSearchService;
use crate::domain::services::project_service::ProjectService;
use crate::presentation::handlers::{
    conversation_handler, discover_handler, lead_search_handler, project_handler,
    save_lead_handler,
};
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// 处理器依赖通过 `Extension` 注入，见 [`app`]
pub fn routes<PR, CR>() -> Router
where
    PR: ProjectRepository + 'static,
    CR: ConversationRepository + 'static,
{
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let protected_routes = Router::new()
        .route(
            "/v1/projects",
            get(project_handler::list_projects::<PR>).post(project_handler::create_project::<PR>),
        )
        .route(
            "/v1/projects/{id}",
            get(project_handler::get_project::<PR>).put(project_handler::update_project::<PR>),
        )
        .route(
            "/v1/leads/search",
            post(lead_search_handler::search_leads::<PR>),
        )
        .route("/v1/leads/save", post(save_lead_handler::save_lead::<PR, CR>))
        .route(
            "/v1/conversations",
            get(conversation_handler::list_conversations::<PR, CR>),
        )
        .route(
            "/v1/conversations/discover",
            post(discover_handler::discover_conversations::<PR, CR>),
        )
        .route(
            "/v1/conversations/{id}",
            get(conversation_handler::get_conversation::<PR, CR>),
        );

    Router::new().merge(public_routes).merge(protected_routes)
}

/// 组装带依赖和请求追踪的完整应用
pub fn app<PR, CR>(
    projects: Arc<ProjectService<PR>>,
    lead_search: Arc<LeadSearchService<PR>>,
    discovery: Arc<ConversationDiscoveryService<PR, CR>>,
) -> Router
where
    PR: ProjectRepository + 'static,
    CR: ConversationRepository + 'static,
{
    routes::<PR, CR>()
        .layer(Extension(projects))
        .layer(Extension(lead_search))
        .layer(Extension(discovery))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
