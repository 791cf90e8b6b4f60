//! Route table, OpenAPI document and cross-cutting HTTP layers.
//!
//! Handlers are registered through `OpenApiRouter` so each `#[utoipa::path]` lands on
//! the generated document, which Swagger UI serves at `/api/docs`.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    Router,
};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{
        assessment::{self, ASSESSMENT_TAG},
        auth::{self, AUTH_TAG},
        budget::{self, BUDGET_TAG},
        completeness::{self, COMPLETENESS_TAG},
        dashboard::{self, DASHBOARD_TAG},
        evidence::{self, EVIDENCE_TAG},
        health::{self, HEALTH_TAG},
        indicator::{self, INDICATOR_TAG},
        journal::{self, JOURNAL_TAG},
        mentoring::{self, MENTORING_TAG},
        pdpa::{self, PDPA_TAG},
        plc::{self, PLC_TAG},
        report::{self, REPORT_TAG},
        school::{self, SCHOOL_TAG},
        self_assessment::{self, SELF_ASSESSMENT_TAG},
        teacher::{self, TEACHER_TAG},
        user::{self, USER_TAG},
    },
    error::{config::ConfigError, internal::InternalError, AppError},
    state::AppState,
};

/// Seconds between replenished login attempts per client IP.
const LOGIN_REPLENISH_SECONDS: u64 = 12;
/// Login attempts a client IP may make back to back.
const LOGIN_BURST: u32 = 5;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "TeacherMon API",
        description = "Mentoring, assessment and budget tracking for assistant teachers"
    ),
    tags(
        (name = AUTH_TAG, description = "Login, session and account bootstrap"),
        (name = USER_TAG, description = "User account administration"),
        (name = SCHOOL_TAG, description = "Schools"),
        (name = TEACHER_TAG, description = "Assistant teachers"),
        (name = ASSESSMENT_TAG, description = "Competency assessments and development plans"),
        (name = SELF_ASSESSMENT_TAG, description = "Teacher self-assessments"),
        (name = MENTORING_TAG, description = "Mentoring visits"),
        (name = JOURNAL_TAG, description = "Monthly reflective journals"),
        (name = PLC_TAG, description = "Professional learning community activities"),
        (name = INDICATOR_TAG, description = "Assessment indicator catalog"),
        (name = EVIDENCE_TAG, description = "Evidence portfolio and uploaded files"),
        (name = COMPLETENESS_TAG, description = "Evidence completeness and pass criteria"),
        (name = BUDGET_TAG, description = "Project budgets and transactions"),
        (name = PDPA_TAG, description = "Consent, personal data requests and retention"),
        (name = DASHBOARD_TAG, description = "Dashboard aggregates"),
        (name = REPORT_TAG, description = "Reports"),
        (name = HEALTH_TAG, description = "Service health"),
    )
)]
struct ApiDoc;

/// Builds the complete application router.
///
/// # Arguments
/// - `config` - Supplies the CORS origin and the upload body limit
///
/// # Returns
/// - `Ok(Router)` - Routes with documentation, rate limiting, CORS and tracing layers
/// - `Err(AppError)` - Invalid CORS origin or rate limiter settings
pub fn router(config: &Config) -> Result<Router<AppState>, AppError> {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(rate_limited_routes()?)
        .routes(routes!(auth::logout))
        .routes(routes!(auth::profile))
        .routes(routes!(auth::register))
        .routes(routes!(user::get_users))
        .routes(routes!(user::update_user))
        .routes(routes!(school::get_schools, school::create_school))
        .routes(routes!(
            school::get_school,
            school::update_school,
            school::delete_school
        ))
        .routes(routes!(school::get_school_teachers))
        .routes(routes!(teacher::get_teachers, teacher::create_teacher))
        .routes(routes!(
            teacher::get_teacher,
            teacher::update_teacher,
            teacher::delete_teacher
        ))
        .routes(routes!(teacher::get_teacher_statistics))
        .routes(routes!(
            assessment::get_competencies,
            assessment::create_competency
        ))
        .routes(routes!(
            assessment::get_competency,
            assessment::update_competency,
            assessment::delete_competency
        ))
        .routes(routes!(assessment::get_plans, assessment::create_plan))
        .routes(routes!(
            assessment::get_plan,
            assessment::update_plan,
            assessment::delete_plan
        ))
        .routes(routes!(
            self_assessment::get_self_assessments,
            self_assessment::create_self_assessment
        ))
        .routes(routes!(
            self_assessment::get_self_assessment,
            self_assessment::update_self_assessment,
            self_assessment::delete_self_assessment
        ))
        .routes(routes!(self_assessment::submit_self_assessment))
        .routes(routes!(self_assessment::review_self_assessment))
        .routes(routes!(mentoring::get_visits, mentoring::create_visit))
        .routes(routes!(
            mentoring::get_visit,
            mentoring::update_visit,
            mentoring::delete_visit
        ))
        .routes(routes!(journal::get_journals, journal::create_journal))
        .routes(routes!(
            journal::get_journal,
            journal::update_journal,
            journal::delete_journal
        ))
        .routes(routes!(plc::get_activities, plc::create_activity))
        .routes(routes!(plc::get_group_stats))
        .routes(routes!(
            plc::get_activity,
            plc::update_activity,
            plc::delete_activity
        ))
        .routes(routes!(indicator::get_indicators))
        .routes(routes!(indicator::get_indicator))
        .routes(routes!(indicator::get_sub_indicators))
        .routes(routes!(indicator::get_sub_indicator))
        .routes(routes!(indicator::get_indicators_by_aspect))
        .routes(routes!(indicator::get_indicators_by_category))
        .routes(routes!(indicator::validate_codes))
        .routes(routes!(evidence::upload_evidence))
        .routes(routes!(evidence::create_video_link))
        .routes(routes!(evidence::get_teacher_evidence))
        .routes(routes!(evidence::get_latest_evidence))
        .routes(routes!(evidence::get_evidence_stats))
        .routes(routes!(evidence::get_evidence, evidence::delete_evidence))
        .routes(routes!(evidence::verify_evidence))
        .routes(routes!(evidence::serve_upload))
        .routes(routes!(completeness::get_teacher_completeness))
        .routes(routes!(completeness::get_my_completeness))
        .routes(routes!(completeness::get_pass_criteria))
        .routes(routes!(budget::get_budgets, budget::create_budget))
        .routes(routes!(budget::update_budget))
        .routes(routes!(budget::get_summary))
        .routes(routes!(budget::get_report))
        .routes(routes!(
            budget::get_transactions,
            budget::create_transaction
        ))
        .routes(routes!(
            budget::get_transaction,
            budget::update_transaction,
            budget::delete_transaction
        ))
        .routes(routes!(budget::approve_transaction))
        .routes(routes!(pdpa::get_consents, pdpa::grant_consent))
        .routes(routes!(pdpa::get_consent_summary))
        .routes(routes!(pdpa::revoke_consent))
        .routes(routes!(pdpa::check_consent))
        .routes(routes!(pdpa::get_my_data, pdpa::delete_my_data))
        .routes(routes!(pdpa::export_my_data))
        .routes(routes!(pdpa::get_retention_stats))
        .routes(routes!(pdpa::get_expiring))
        .routes(routes!(pdpa::run_cleanup))
        .routes(routes!(dashboard::get_stats))
        .routes(routes!(dashboard::get_teachers))
        .routes(routes!(dashboard::get_trends))
        .routes(routes!(report::get_teacher_assessment))
        .routes(routes!(health::health))
        .split_for_parts();

    Ok(api_router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(cors_layer(config)?)
        .layer(TraceLayer::new_for_http()))
}

/// Login and first-admin setup, limited per client IP.
///
/// The key extractor reads `X-Forwarded-For` first, then the peer address, so the
/// server must be served with connect info.
fn rate_limited_routes() -> Result<OpenApiRouter<AppState>, AppError> {
    let governor = GovernorConfigBuilder::default()
        .per_second(LOGIN_REPLENISH_SECONDS)
        .burst_size(LOGIN_BURST)
        .key_extractor(SmartIpKeyExtractor)
        .finish()
        .ok_or(InternalError::RateLimitConfig)?;

    Ok(OpenApiRouter::new()
        .routes(routes!(auth::login))
        .routes(routes!(auth::setup))
        .layer(GovernorLayer::new(Arc::new(governor))))
}

fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let origin: HeaderValue =
        config
            .cors_origin
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: "CORS_ORIGIN".to_string(),
                value: config.cors_origin.clone(),
            })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, ACCEPT, AUTHORIZATION]))
}
