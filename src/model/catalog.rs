//! Data catalog records: tables, columns, storage and partition queries

use crate::model_record;
use crate::validate::patterns::{MULTI_LINE, SINGLE_LINE};
use crate::validate::Constraint::{Length, Min, Pattern, Range};
use chrono::{DateTime, Utc};

model_record! {
    /// A column in a table or a partition key
    pub struct Column {
        /// Column name
        name: string => "Name" [Length(1, 255), Pattern(SINGLE_LINE)],
        /// Data type of the column (e.g. `bigint`, `struct<a:int>`)
        column_type: string => "Type" [Length(0, 131_072), Pattern(MULTI_LINE)],
        /// Free-form comment
        comment: string => "Comment" [Length(0, 255), Pattern(MULTI_LINE)],
        /// Key/value properties of the column
        parameters: map => "Parameters",
    }
}

model_record! {
    /// Serialization/deserialization program used for a table's data
    pub struct SerDeInfo {
        name: string => "Name" [Length(1, 255), Pattern(SINGLE_LINE)],
        /// Usually the class that implements the SerDe
        serialization_library: string => "SerializationLibrary" [Length(1, 255), Pattern(SINGLE_LINE)],
        parameters: map => "Parameters",
    }
}

model_record! {
    /// Sort order of one column
    pub struct Order {
        column: string => "Column" [Length(1, 255), Pattern(SINGLE_LINE)],
        /// `1` for ascending, `0` for descending
        sort_order: value(i32) => "SortOrder" [Range(0.0, 1.0)],
    }
}

model_record! {
    /// Physical storage of a table's data
    pub struct StorageDescriptor {
        columns: list(Column) => "Columns",
        /// Physical location of the table, by default `warehouse/database/table`
        location: string => "Location" [Length(0, 2056), Pattern(MULTI_LINE)],
        input_format: string => "InputFormat" [Length(0, 128), Pattern(SINGLE_LINE)],
        output_format: string => "OutputFormat" [Length(0, 128), Pattern(SINGLE_LINE)],
        compressed: value(bool) => "Compressed",
        /// Must be given if the table contains dimension columns
        number_of_buckets: value(i32) => "NumberOfBuckets",
        serde_info: record(SerDeInfo) => "SerdeInfo",
        bucket_columns: list(String) => "BucketColumns",
        sort_columns: list(Order) => "SortColumns",
        parameters: map => "Parameters",
        stored_as_sub_directories: value(bool) => "StoredAsSubDirectories",
    }
}

model_record! {
    /// A table definition in the data catalog
    pub struct Table {
        /// Table name; lowercased by the service when stored
        name: string => "Name" [Length(1, 255), Pattern(SINGLE_LINE)],
        /// Database the table metadata resides in
        database_name: string => "DatabaseName" [Length(1, 255), Pattern(SINGLE_LINE)],
        description: string => "Description" [Length(0, 2048), Pattern(MULTI_LINE)],
        owner: string => "Owner" [Length(1, 255), Pattern(SINGLE_LINE)],
        create_time: value(DateTime<Utc>) => "CreateTime",
        update_time: value(DateTime<Utc>) => "UpdateTime",
        last_access_time: value(DateTime<Utc>) => "LastAccessTime",
        last_analyzed_time: value(DateTime<Utc>) => "LastAnalyzedTime",
        /// Retention time, in days
        retention: value(i32) => "Retention" [Min(0.0)],
        storage_descriptor: record(StorageDescriptor) => "StorageDescriptor",
        /// Columns the table is partitioned by
        partition_keys: list(Column) => "PartitionKeys",
        /// Original text of a view, if the table is a view
        view_original_text: string => "ViewOriginalText" [Length(0, 409_600)],
        view_expanded_text: string => "ViewExpandedText" [Length(0, 409_600)],
        /// `EXTERNAL_TABLE`, `VIRTUAL_VIEW`, ...
        table_type: string => "TableType" [Length(0, 255)],
        parameters: map => "Parameters",
        created_by: string => "CreatedBy" [Length(1, 255), Pattern(SINGLE_LINE)],
        is_registered_with_lake_formation: value(bool) => "IsRegisteredWithLakeFormation",
        catalog_id: string => "CatalogId" [Length(1, 255), Pattern(SINGLE_LINE)],
    }
}

model_record! {
    /// A non-overlapping region of a table's partitions, for parallel scans
    pub struct Segment {
        /// Zero-based index of this segment
        segment_number: value(i32) => "SegmentNumber" [Min(0.0)],
        total_segments: value(i32) => "TotalSegments" [Range(1.0, 10.0)],
    }
}

model_record! {
    /// Request to list the partitions of a table
    pub struct GetPartitionsRequest {
        /// Defaults to the caller's account ID
        catalog_id: string => "CatalogId" [Length(1, 255), Pattern(SINGLE_LINE)],
        database_name: string => "DatabaseName" [Length(1, 255), Pattern(SINGLE_LINE)],
        table_name: string => "TableName" [Length(1, 255), Pattern(SINGLE_LINE)],
        /// Partition filter, a SQL-like `WHERE` expression
        expression: string => "Expression" [Length(0, 2048), Pattern(MULTI_LINE)],
        /// Continuation token from a previous call
        next_token: string => "NextToken",
        segment: record(Segment) => "Segment",
        max_results: value(i32) => "MaxResults" [Range(1.0, 1000.0)],
    }
}
