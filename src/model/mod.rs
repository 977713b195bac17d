//! Concrete records exchanged with the service
//!
//! Every type here is generated by [`model_record!`](crate::model_record) and
//! shares the same contract: all fields optional, `get_*` / `set_*` /
//! `with_*` accessors, structural equality and hashing, and a
//! `{Label: value,...}` rendering of the present fields.
//!
//! ```
//! use glue_model::model::Table;
//!
//! let mut table = Table::new();
//! table
//!     .with_name("orders")
//!     .with_database_name("sales_db")
//!     .add_parameters_entry("classification", "parquet")?;
//!
//! assert_eq!(
//!     table.to_string(),
//!     "{Name: orders,DatabaseName: sales_db,Parameters: {classification=parquet}}"
//! );
//! # Ok::<(), glue_model::DuplicateKeyError>(())
//! ```

mod catalog;
mod connection;
mod crawler;
mod dev_endpoint;
mod job;
mod ml;

pub use catalog::{Column, GetPartitionsRequest, Order, SerDeInfo, Segment, StorageDescriptor, Table};
pub use connection::{Connection, PhysicalConnectionRequirements};
pub use crawler::{
    CatalogTarget, Crawler, CrawlerTargets, DynamoDbTarget, JdbcTarget, LastCrawlInfo,
    S3Target, Schedule, SchemaChangePolicy,
};
pub use dev_endpoint::{CreateDevEndpointRequest, CreateDevEndpointResult, DevEndpoint};
pub use job::{
    ConnectionsList, CreateJobRequest, ExecutionProperty, JobCommand, JobRun,
    NotificationProperty, Predecessor, StartJobRunRequest,
};
pub use ml::{
    ConfusionMatrix, CreateMLTransformRequest, EvaluationMetrics, ExportLabelsTaskRunProperties,
    FindMatchesMetrics, FindMatchesParameters, GetMLTransformResult, GlueTable, SchemaColumn,
    TransformParameters,
};
