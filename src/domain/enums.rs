/// Wire token sets used by the model types.

use crate::domain::shape::string_enum;

string_enum! {
    /// How a route authorizes callers.
    pub enum AuthorizationType {
        None => "NONE",
        AwsIam => "AWS_IAM",
        Custom => "CUSTOM",
        Jwt => "JWT",
    }
}

string_enum! {
    pub enum AuthorizerType {
        Request => "REQUEST",
        Jwt => "JWT",
    }
}

string_enum! {
    /// Network path an integration takes to reach its backend.
    pub enum ConnectionType {
        Internet => "INTERNET",
        VpcLink => "VPC_LINK",
    }
}

string_enum! {
    pub enum ContentHandlingStrategy {
        ConvertToBinary => "CONVERT_TO_BINARY",
        ConvertToText => "CONVERT_TO_TEXT",
    }
}

string_enum! {
    pub enum DeploymentStatus {
        Pending => "PENDING",
        Failed => "FAILED",
        Deployed => "DEPLOYED",
    }
}

string_enum! {
    pub enum DomainNameStatus {
        Available => "AVAILABLE",
        Updating => "UPDATING",
    }
}

string_enum! {
    pub enum EndpointType {
        Regional => "REGIONAL",
        Edge => "EDGE",
    }
}

string_enum! {
    /// Backend kind invoked by an integration.
    pub enum IntegrationType {
        Aws => "AWS",
        Http => "HTTP",
        Mock => "MOCK",
        HttpProxy => "HTTP_PROXY",
        AwsProxy => "AWS_PROXY",
    }
}

string_enum! {
    pub enum LoggingLevel {
        Error => "ERROR",
        Info => "INFO",
        Off => "OFF",
    }
}

string_enum! {
    /// Whether unmapped content types pass through to the backend untransformed.
    pub enum PassthroughBehavior {
        WhenNoMatch => "WHEN_NO_MATCH",
        Never => "NEVER",
        WhenNoTemplates => "WHEN_NO_TEMPLATES",
    }
}

string_enum! {
    pub enum ProtocolType {
        Websocket => "WEBSOCKET",
        Http => "HTTP",
    }
}

string_enum! {
    /// Minimum TLS version accepted by a custom domain name.
    pub enum SecurityPolicy {
        Tls10 => "TLS_1_0",
        Tls12 => "TLS_1_2",
    }
}

string_enum! {
    pub enum VpcLinkStatus {
        Pending => "PENDING",
        Available => "AVAILABLE",
        Deleting => "DELETING",
        Failed => "FAILED",
        Inactive => "INACTIVE",
    }
}

string_enum! {
    pub enum VpcLinkVersion {
        V2 => "V2",
    }
}
