/// Test modules for odata-discovery
///
/// Tests are organized into logical groupings:
/// - metadata: CSDL document generation (type mapping, schema, container)
/// - service: service document listing
mod metadata;
mod service;
