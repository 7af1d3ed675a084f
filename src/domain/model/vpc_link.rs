/// VPC links: private connectivity from HTTP APIs into a VPC.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::domain::enums::{VpcLinkStatus, VpcLinkVersion};
use crate::domain::shape::shape;

shape! {
    pub struct VpcLink, CreateVpcLinkResult, GetVpcLinkResult, UpdateVpcLinkResult {
        created_date / set_created_date / with_created_date: DateTime<Utc>,
        name / set_name / with_name: String,
        security_group_ids / set_security_group_ids / with_security_group_ids: Vec<String>,
        subnet_ids / set_subnet_ids / with_subnet_ids: Vec<String>,
        tags / set_tags / with_tags: BTreeMap<String, String>
            => add_tags_entry / clear_tags_entries,
        vpc_link_id / set_vpc_link_id / with_vpc_link_id: String,
        vpc_link_status / set_vpc_link_status / with_vpc_link_status: VpcLinkStatus,
        vpc_link_status_message / set_vpc_link_status_message
            / with_vpc_link_status_message: String,
        vpc_link_version / set_vpc_link_version / with_vpc_link_version: VpcLinkVersion,
    }
}

shape! {
    pub struct CreateVpcLinkRequest {
        name / set_name / with_name: String,
        security_group_ids / set_security_group_ids / with_security_group_ids: Vec<String>,
        subnet_ids / set_subnet_ids / with_subnet_ids: Vec<String>,
        tags / set_tags / with_tags: BTreeMap<String, String>
            => add_tags_entry / clear_tags_entries,
    }
}

shape! {
    pub struct UpdateVpcLinkRequest {
        name / set_name / with_name: String,
        vpc_link_id / set_vpc_link_id / with_vpc_link_id: String,
    }
}

shape! {
    pub struct GetVpcLinkRequest, DeleteVpcLinkRequest {
        vpc_link_id / set_vpc_link_id / with_vpc_link_id: String,
    }
}

shape! {
    pub struct DeleteVpcLinkResult {}
}

shape! {
    pub struct GetVpcLinksRequest {
        max_results / set_max_results / with_max_results: String,
        next_token / set_next_token / with_next_token: String,
    }
}

shape! {
    pub struct GetVpcLinksResult {
        items / set_items / with_items: Vec<VpcLink>,
        next_token / set_next_token / with_next_token: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vpc_link_status_parses() {
        let link: GetVpcLinkResult = serde_json::from_str(
            r#"{"vpcLinkId": "v1", "vpcLinkStatus": "INACTIVE", "vpcLinkVersion": "V2"}"#,
        )
        .unwrap();
        assert_eq!(link.vpc_link_status(), Some(&VpcLinkStatus::Inactive));
        assert_eq!(link.vpc_link_version(), Some(&VpcLinkVersion::V2));
    }

    #[test]
    fn test_empty_result_displays_braces() {
        assert_eq!(DeleteVpcLinkResult::new().to_string(), "{}");
        assert_eq!(DeleteVpcLinkResult::new(), DeleteVpcLinkResult::default());
    }
}
