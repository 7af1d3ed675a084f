/// Stages: named deployment targets with their logging and throttling settings.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::domain::enums::LoggingLevel;
use crate::domain::shape::{shape, RateLimit};

shape! {
    pub struct AccessLogSettings {
        /// ARN of the CloudWatch Logs log group receiving access logs.
        destination_arn / set_destination_arn / with_destination_arn: String,
        /// Single-line log format using `$context` variables.
        format / set_format / with_format: String,
    }
}

shape! {
    /// Per-route logging, metrics and throttling.
    pub struct RouteSettings {
        data_trace_enabled / set_data_trace_enabled / with_data_trace_enabled: bool,
        detailed_metrics_enabled / set_detailed_metrics_enabled
            / with_detailed_metrics_enabled: bool,
        logging_level / set_logging_level / with_logging_level: LoggingLevel,
        throttling_burst_limit / set_throttling_burst_limit / with_throttling_burst_limit: i32,
        throttling_rate_limit / set_throttling_rate_limit / with_throttling_rate_limit: RateLimit,
    }
}

shape! {
    pub struct Stage, CreateStageResult, GetStageResult, UpdateStageResult {
        access_log_settings / set_access_log_settings / with_access_log_settings: AccessLogSettings,
        api_gateway_managed / set_api_gateway_managed / with_api_gateway_managed: bool,
        auto_deploy / set_auto_deploy / with_auto_deploy: bool,
        client_certificate_id / set_client_certificate_id / with_client_certificate_id: String,
        created_date / set_created_date / with_created_date: DateTime<Utc>,
        default_route_settings / set_default_route_settings
            / with_default_route_settings: RouteSettings,
        deployment_id / set_deployment_id / with_deployment_id: String,
        description / set_description / with_description: String,
        last_deployment_status_message / set_last_deployment_status_message
            / with_last_deployment_status_message: String,
        last_updated_date / set_last_updated_date / with_last_updated_date: DateTime<Utc>,
        /// Overrides of `default_route_settings`, keyed by route key.
        route_settings / set_route_settings / with_route_settings: BTreeMap<String, RouteSettings>
            => add_route_settings_entry / clear_route_settings_entries,
        stage_name / set_stage_name / with_stage_name: String,
        stage_variables / set_stage_variables / with_stage_variables: BTreeMap<String, String>
            => add_stage_variables_entry / clear_stage_variables_entries,
        tags / set_tags / with_tags: BTreeMap<String, String>
            => add_tags_entry / clear_tags_entries,
    }
}

shape! {
    pub struct CreateStageRequest {
        access_log_settings / set_access_log_settings / with_access_log_settings: AccessLogSettings,
        api_id / set_api_id / with_api_id: String,
        auto_deploy / set_auto_deploy / with_auto_deploy: bool,
        client_certificate_id / set_client_certificate_id / with_client_certificate_id: String,
        default_route_settings / set_default_route_settings
            / with_default_route_settings: RouteSettings,
        deployment_id / set_deployment_id / with_deployment_id: String,
        description / set_description / with_description: String,
        route_settings / set_route_settings / with_route_settings: BTreeMap<String, RouteSettings>
            => add_route_settings_entry / clear_route_settings_entries,
        stage_name / set_stage_name / with_stage_name: String,
        stage_variables / set_stage_variables / with_stage_variables: BTreeMap<String, String>
            => add_stage_variables_entry / clear_stage_variables_entries,
        tags / set_tags / with_tags: BTreeMap<String, String>
            => add_tags_entry / clear_tags_entries,
    }
}

shape! {
    pub struct UpdateStageRequest {
        access_log_settings / set_access_log_settings / with_access_log_settings: AccessLogSettings,
        api_id / set_api_id / with_api_id: String,
        auto_deploy / set_auto_deploy / with_auto_deploy: bool,
        client_certificate_id / set_client_certificate_id / with_client_certificate_id: String,
        default_route_settings / set_default_route_settings
            / with_default_route_settings: RouteSettings,
        deployment_id / set_deployment_id / with_deployment_id: String,
        description / set_description / with_description: String,
        route_settings / set_route_settings / with_route_settings: BTreeMap<String, RouteSettings>
            => add_route_settings_entry / clear_route_settings_entries,
        stage_name / set_stage_name / with_stage_name: String,
        stage_variables / set_stage_variables / with_stage_variables: BTreeMap<String, String>
            => add_stage_variables_entry / clear_stage_variables_entries,
    }
}

shape! {
    pub struct GetStageRequest, DeleteStageRequest, DeleteAccessLogSettingsRequest {
        api_id / set_api_id / with_api_id: String,
        stage_name / set_stage_name / with_stage_name: String,
    }
}

shape! {
    pub struct DeleteRouteSettingsRequest {
        api_id / set_api_id / with_api_id: String,
        route_key / set_route_key / with_route_key: String,
        stage_name / set_stage_name / with_stage_name: String,
    }
}

shape! {
    pub struct GetStagesRequest {
        api_id / set_api_id / with_api_id: String,
        max_results / set_max_results / with_max_results: String,
        next_token / set_next_token / with_next_token: String,
    }
}

shape! {
    pub struct GetStagesResult {
        items / set_items / with_items: Vec<Stage>,
        next_token / set_next_token / with_next_token: String,
    }
}
