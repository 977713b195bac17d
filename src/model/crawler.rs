//! Crawlers and their targets, policies and schedules

use crate::model_record;
use crate::types::{CrawlerState, DeleteBehavior, LastCrawlStatus, ScheduleState, UpdateBehavior};
use crate::validate::patterns::{MULTI_LINE, SINGLE_LINE};
use crate::validate::Constraint::{KnownEnum, Length, Min, MinLength, Pattern};
use chrono::{DateTime, Utc};

model_record! {
    /// An Amazon S3 path to crawl
    pub struct S3Target {
        path: string => "Path",
        /// Glob patterns excluded from the crawl
        exclusions: list(String) => "Exclusions",
        connection_name: string => "ConnectionName",
    }
}

model_record! {
    /// A JDBC data store to crawl
    pub struct JdbcTarget {
        connection_name: string => "ConnectionName",
        path: string => "Path",
        exclusions: list(String) => "Exclusions",
    }
}

model_record! {
    /// A DynamoDB table to crawl
    pub struct DynamoDbTarget {
        /// Name of the table
        path: string => "Path",
    }
}

model_record! {
    /// Existing catalog tables to crawl
    pub struct CatalogTarget {
        database_name: string => "DatabaseName" [Length(1, 255), Pattern(SINGLE_LINE)],
        tables: list(String) => "Tables" [MinLength(1)],
    }
}

model_record! {
    /// Data stores a crawler visits
    pub struct CrawlerTargets {
        s3_targets: list(S3Target) => "S3Targets",
        jdbc_targets: list(JdbcTarget) => "JdbcTargets",
        dynamo_db_targets: list(DynamoDbTarget) => "DynamoDBTargets",
        catalog_targets: list(CatalogTarget) => "CatalogTargets",
    }
}

model_record! {
    /// Update and delete behavior of a crawler
    pub struct SchemaChangePolicy {
        update_behavior: open_enum(UpdateBehavior) => "UpdateBehavior" [KnownEnum],
        delete_behavior: open_enum(DeleteBehavior) => "DeleteBehavior" [KnownEnum],
    }
}

model_record! {
    /// A cron-based schedule
    pub struct Schedule {
        /// e.g. `cron(15 12 * * ? *)`
        schedule_expression: string => "ScheduleExpression",
        state: open_enum(ScheduleState) => "State" [KnownEnum],
    }
}

model_record! {
    /// Information about the most recent crawl
    pub struct LastCrawlInfo {
        status: open_enum(LastCrawlStatus) => "Status" [KnownEnum],
        /// Set if an error occurred
        error_message: string => "ErrorMessage" [Length(0, 2048), Pattern(MULTI_LINE)],
        log_group: string => "LogGroup" [Length(1, 512), Pattern(r"[\.\-_/#A-Za-z0-9]+")],
        log_stream: string => "LogStream" [Length(1, 512), Pattern(r"[^:*]*")],
        message_prefix: string => "MessagePrefix" [Length(1, 255), Pattern(SINGLE_LINE)],
        start_time: value(DateTime<Utc>) => "StartTime",
    }
}

model_record! {
    /// A crawler definition
    ///
    /// A crawler visits its [`CrawlerTargets`], classifies what it finds and
    /// writes table definitions into `DatabaseName`.
    pub struct Crawler {
        name: string => "Name" [Length(1, 255), Pattern(SINGLE_LINE)],
        /// IAM role used to access customer resources
        role: string => "Role",
        targets: record(CrawlerTargets) => "Targets",
        /// Database where crawler output is stored
        database_name: string => "DatabaseName",
        description: string => "Description" [Length(0, 2048), Pattern(MULTI_LINE)],
        /// Custom classifiers associated with the crawler
        classifiers: list(String) => "Classifiers",
        schema_change_policy: record(SchemaChangePolicy) => "SchemaChangePolicy",
        state: open_enum(CrawlerState) => "State" [KnownEnum],
        table_prefix: string => "TablePrefix" [Length(0, 128)],
        schedule: record(Schedule) => "Schedule",
        /// If running, time elapsed since the crawl started, in milliseconds
        crawl_elapsed_time: value(i64) => "CrawlElapsedTime",
        creation_time: value(DateTime<Utc>) => "CreationTime",
        last_updated: value(DateTime<Utc>) => "LastUpdated",
        last_crawl: record(LastCrawlInfo) => "LastCrawl",
        version: value(i64) => "Version" [Min(0.0)],
        /// Crawler configuration as a JSON string
        configuration: string => "Configuration",
        crawler_security_configuration: string => "CrawlerSecurityConfiguration" [Length(0, 128)],
    }
}
