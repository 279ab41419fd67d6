//! Fixed EDM/CSDL vocabulary used by the metadata document

/// EDMX version written on the root element
pub const EDMX_VERSION: &str = "4.0";

/// Namespace of the `edmx:` prefix
pub const EDMX_NAMESPACE: &str = "http://docs.oasis-open.org/odata/ns/edmx";

/// Default namespace of the `Schema` element
pub const EDM_NAMESPACE: &str = "http://docs.oasis-open.org/odata/ns/edm";

/// Namespace every catalog type is declared in
pub const SCHEMA_NAMESPACE: &str = "global";

/// Name of the single entity container
pub const CONTAINER_NAME: &str = "DefaultContainer";

/// Declared name of the synthetic always-open entity type
pub const DYNAMIC_RESOURCE_DECLARATION: &str = "RESTar.DynamicResource";

/// Full type names
pub mod types {
    pub const BINARY: &str = "Edm.Binary";
    pub const GUID: &str = "Edm.Guid";
    pub const PRIMITIVE_TYPE: &str = "Edm.PrimitiveType";
    pub const COMPLEX_TYPE: &str = "Edm.ComplexType";
    pub const DYNAMIC_RESOURCE: &str = "global.RESTar.DynamicResource";
    pub const BOOLEAN: &str = "Edm.Boolean";
    pub const BYTE: &str = "Edm.Byte";
    pub const SBYTE: &str = "Edm.SByte";
    pub const DATE_TIME_OFFSET: &str = "Edm.DateTimeOffset";
    pub const DECIMAL: &str = "Edm.Decimal";
    pub const DOUBLE: &str = "Edm.Double";
    pub const SINGLE: &str = "Edm.Single";
    pub const INT16: &str = "Edm.Int16";
    pub const INT32: &str = "Edm.Int32";
    pub const INT64: &str = "Edm.Int64";
    pub const STRING: &str = "Edm.String";
}

/// Annotation terms and their enum members
pub mod terms {
    pub const PERMISSIONS: &str = "Org.OData.Core.V1.Permissions";
    pub const PERMISSION_READ: &str = "Org.OData.Core.V1.Permission/Read";
    pub const PERMISSION_WRITE: &str = "Org.OData.Core.V1.Permission/Write";

    pub const INSERT_RESTRICTIONS: &str = "Org.OData.Capabilities.V1.InsertRestrictions";
    pub const UPDATE_RESTRICTIONS: &str = "Org.OData.Capabilities.V1.UpdateRestrictions";
    pub const DELETE_RESTRICTIONS: &str = "Org.OData.Capabilities.V1.DeleteRestrictions";

    pub const CONFORMANCE_LEVEL: &str = "Org.OData.Capabilities.V1.ConformanceLevel";
    pub const CONFORMANCE_LEVEL_MINIMAL: &str =
        "Org.OData.Capabilities.V1.ConformanceLevelType/Minimal";
    pub const SUPPORTED_FORMATS: &str = "Org.OData.Capabilities.V1.SupportedFormats";
    pub const ASYNCHRONOUS_REQUESTS_SUPPORTED: &str =
        "Org.OData.Capabilities.V1.AsynchronousRequestsSupported";
    pub const FILTER_FUNCTIONS: &str = "Org.OData.Capabilities.V1.FilterFunctions";
}

/// The one content type advertised under `SupportedFormats`
pub const SUPPORTED_FORMAT: &str =
    "application/json;odata.metadata=minimal;IEEE754Compatible=false;odata.streaming=true";

/// Qualified name of a type declared in the schema namespace
pub fn qualified(full_name: &str) -> String {
    format!("{}.{}", SCHEMA_NAMESPACE, full_name)
}

/// Serialize a boolean the way CSDL expects it
pub fn bool_literal(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
