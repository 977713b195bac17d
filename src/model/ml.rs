//! Machine learning transforms

use crate::model_record;
use crate::types::{TransformStatusType, TransformType, WorkerType};
use crate::validate::patterns::{GLUE_VERSION, MULTI_LINE, SINGLE_LINE};
use crate::validate::Constraint::{KnownEnum, Length, Min, Pattern, Range};
use chrono::{DateTime, Utc};

model_record! {
    /// Properties of a labels export task run
    pub struct ExportLabelsTaskRunProperties {
        /// S3 path the labels are exported to
        output_s3_path: string => "OutputS3Path",
    }
}

model_record! {
    /// A catalog table used as transform input
    pub struct GlueTable {
        database_name: string => "DatabaseName" [Length(1, 255), Pattern(SINGLE_LINE)],
        table_name: string => "TableName" [Length(1, 255), Pattern(SINGLE_LINE)],
        catalog_id: string => "CatalogId" [Length(1, 255), Pattern(SINGLE_LINE)],
        connection_name: string => "ConnectionName" [Length(1, 255), Pattern(SINGLE_LINE)],
    }
}

model_record! {
    /// Tuning of a find-matches transform
    pub struct FindMatchesParameters {
        /// Column that uniquely identifies rows in the source table
        primary_key_column_name: string => "PrimaryKeyColumnName" [Length(1, 1024), Pattern(SINGLE_LINE)],
        /// Closer to 1.0 favors recall, closer to 0.0 favors precision
        precision_recall_tradeoff: value(f64) => "PrecisionRecallTradeoff" [Range(0.0, 1.0)],
        /// Closer to 1.0 favors accuracy, closer to 0.0 favors cost
        accuracy_cost_tradeoff: value(f64) => "AccuracyCostTradeoff" [Range(0.0, 1.0)],
        enforce_provided_labels: value(bool) => "EnforceProvidedLabels",
    }
}

model_record! {
    /// Algorithm-specific parameters of a transform
    pub struct TransformParameters {
        transform_type: open_enum(TransformType) => "TransformType" [KnownEnum],
        find_matches_parameters: record(FindMatchesParameters) => "FindMatchesParameters",
    }
}

model_record! {
    pub struct ConfusionMatrix {
        num_true_positives: value(i64) => "NumTruePositives",
        num_false_positives: value(i64) => "NumFalsePositives",
        num_true_negatives: value(i64) => "NumTrueNegatives",
        num_false_negatives: value(i64) => "NumFalseNegatives",
    }
}

model_record! {
    /// Quality metrics of a find-matches transform
    pub struct FindMatchesMetrics {
        area_under_pr_curve: value(f64) => "AreaUnderPRCurve" [Range(0.0, 1.0)],
        precision: value(f64) => "Precision" [Range(0.0, 1.0)],
        recall: value(f64) => "Recall" [Range(0.0, 1.0)],
        f1: value(f64) => "F1" [Range(0.0, 1.0)],
        confusion_matrix: record(ConfusionMatrix) => "ConfusionMatrix",
    }
}

model_record! {
    pub struct EvaluationMetrics {
        transform_type: open_enum(TransformType) => "TransformType" [KnownEnum],
        find_matches_metrics: record(FindMatchesMetrics) => "FindMatchesMetrics",
    }
}

model_record! {
    /// A column of the transform's input schema
    pub struct SchemaColumn {
        name: string => "Name" [Length(1, 1024), Pattern(SINGLE_LINE)],
        data_type: string => "DataType" [Length(0, 131_072), Pattern(SINGLE_LINE)],
    }
}

model_record! {
    /// Request to create a machine learning transform
    pub struct CreateMLTransformRequest {
        name: string => "Name" [Length(1, 255), Pattern(SINGLE_LINE)],
        description: string => "Description" [Length(0, 2048), Pattern(MULTI_LINE)],
        /// Tables the transform reads
        input_record_tables: list(GlueTable) => "InputRecordTables" [Length(0, 10)],
        parameters: record(TransformParameters) => "Parameters",
        /// IAM role name or ARN with the required permissions
        role: string => "Role",
        glue_version: string => "GlueVersion" [Length(1, 255), Pattern(GLUE_VERSION)],
        max_capacity: value(f64) => "MaxCapacity",
        worker_type: open_enum(WorkerType) => "WorkerType" [KnownEnum],
        number_of_workers: value(i32) => "NumberOfWorkers",
        /// Minutes a task run may take
        timeout: value(i32) => "Timeout" [Min(1.0)],
        max_retries: value(i32) => "MaxRetries",
        tags: map => "Tags" [Length(0, 50)],
    }
}

model_record! {
    /// A machine learning transform, as returned by the service
    pub struct GetMLTransformResult {
        transform_id: string => "TransformId" [Length(1, 255), Pattern(SINGLE_LINE)],
        name: string => "Name" [Length(1, 255), Pattern(SINGLE_LINE)],
        description: string => "Description" [Length(0, 2048), Pattern(MULTI_LINE)],
        status: open_enum(TransformStatusType) => "Status" [KnownEnum],
        created_on: value(DateTime<Utc>) => "CreatedOn",
        last_modified_on: value(DateTime<Utc>) => "LastModifiedOn",
        input_record_tables: list(GlueTable) => "InputRecordTables" [Length(0, 10)],
        parameters: record(TransformParameters) => "Parameters",
        evaluation_metrics: record(EvaluationMetrics) => "EvaluationMetrics",
        /// Number of labels available for this transform
        label_count: value(i32) => "LabelCount",
        schema: list(SchemaColumn) => "Schema" [Length(0, 100)],
        role: string => "Role",
        glue_version: string => "GlueVersion" [Length(1, 255), Pattern(GLUE_VERSION)],
        max_capacity: value(f64) => "MaxCapacity",
        worker_type: open_enum(WorkerType) => "WorkerType" [KnownEnum],
        number_of_workers: value(i32) => "NumberOfWorkers",
        timeout: value(i32) => "Timeout" [Min(1.0)],
        max_retries: value(i32) => "MaxRetries",
    }
}
