/// Custom domain names and their endpoint configurations.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::domain::enums::{DomainNameStatus, EndpointType, SecurityPolicy};
use crate::domain::shape::shape;

shape! {
    /// One endpoint configuration of a custom domain name.
    pub struct DomainNameConfiguration {
        /// Target domain name to point DNS records at.
        api_gateway_domain_name / set_api_gateway_domain_name
            / with_api_gateway_domain_name: String,
        certificate_arn / set_certificate_arn / with_certificate_arn: String,
        certificate_name / set_certificate_name / with_certificate_name: String,
        certificate_upload_date / set_certificate_upload_date
            / with_certificate_upload_date: DateTime<Utc>,
        domain_name_status / set_domain_name_status / with_domain_name_status: DomainNameStatus,
        domain_name_status_message / set_domain_name_status_message
            / with_domain_name_status_message: String,
        endpoint_type / set_endpoint_type / with_endpoint_type: EndpointType,
        /// Route 53 hosted zone of the target domain name.
        hosted_zone_id / set_hosted_zone_id / with_hosted_zone_id: String,
        security_policy / set_security_policy / with_security_policy: SecurityPolicy,
    }
}

shape! {
    pub struct DomainName, CreateDomainNameResult, GetDomainNameResult, UpdateDomainNameResult {
        api_mapping_selection_expression / set_api_mapping_selection_expression
            / with_api_mapping_selection_expression: String,
        domain_name / set_domain_name / with_domain_name: String,
        domain_name_configurations / set_domain_name_configurations
            / with_domain_name_configurations: Vec<DomainNameConfiguration>,
        tags / set_tags / with_tags: BTreeMap<String, String>
            => add_tags_entry / clear_tags_entries,
    }
}

shape! {
    pub struct CreateDomainNameRequest {
        domain_name / set_domain_name / with_domain_name: String,
        domain_name_configurations / set_domain_name_configurations
            / with_domain_name_configurations: Vec<DomainNameConfiguration>,
        tags / set_tags / with_tags: BTreeMap<String, String>
            => add_tags_entry / clear_tags_entries,
    }
}

shape! {
    pub struct UpdateDomainNameRequest {
        domain_name / set_domain_name / with_domain_name: String,
        domain_name_configurations / set_domain_name_configurations
            / with_domain_name_configurations: Vec<DomainNameConfiguration>,
    }
}

shape! {
    pub struct GetDomainNameRequest, DeleteDomainNameRequest {
        domain_name / set_domain_name / with_domain_name: String,
    }
}

shape! {
    pub struct GetDomainNamesRequest {
        max_results / set_max_results / with_max_results: String,
        next_token / set_next_token / with_next_token: String,
    }
}

shape! {
    pub struct GetDomainNamesResult {
        items / set_items / with_items: Vec<DomainName>,
        next_token / set_next_token / with_next_token: String,
    }
}
