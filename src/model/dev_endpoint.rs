//! Development endpoints

use crate::model_record;
use crate::types::WorkerType;
use crate::validate::patterns::{GLUE_VERSION, ROLE_ARN, SINGLE_LINE};
use crate::validate::Constraint::{KnownEnum, Length, Pattern};
use chrono::{DateTime, Utc};

model_record! {
    /// Request to create a development endpoint
    pub struct CreateDevEndpointRequest {
        /// Name to assign to the new endpoint
        endpoint_name: string => "EndpointName",
        /// IAM role for the endpoint
        role_arn: string => "RoleArn" [Pattern(ROLE_ARN)],
        security_group_ids: list(String) => "SecurityGroupIds",
        subnet_id: string => "SubnetId",
        /// Prefer `PublicKeys`, which allows one key per client
        public_key: string => "PublicKey",
        public_keys: list(String) => "PublicKeys" [Length(0, 5)],
        /// Number of DPUs to allocate
        number_of_nodes: value(i32) => "NumberOfNodes",
        worker_type: open_enum(WorkerType) => "WorkerType" [KnownEnum],
        /// Determines the Spark and Python versions available
        glue_version: string => "GlueVersion" [Length(1, 255), Pattern(GLUE_VERSION)],
        number_of_workers: value(i32) => "NumberOfWorkers",
        /// Comma-separated S3 paths of Python libraries to load
        extra_python_libs_s3_path: string => "ExtraPythonLibsS3Path",
        extra_jars_s3_path: string => "ExtraJarsS3Path",
        security_configuration: string => "SecurityConfiguration" [Length(1, 255), Pattern(SINGLE_LINE)],
        tags: map => "Tags" [Length(0, 50)],
        /// Arguments used to configure the endpoint
        arguments: map => "Arguments" [Length(0, 100)],
    }
}

model_record! {
    /// Result of creating a development endpoint
    pub struct CreateDevEndpointResult {
        endpoint_name: string => "EndpointName",
        /// Current status of the new endpoint
        status: string => "Status",
        security_group_ids: list(String) => "SecurityGroupIds",
        subnet_id: string => "SubnetId",
        role_arn: string => "RoleArn" [Pattern(ROLE_ARN)],
        /// Address of the YARN endpoint
        yarn_endpoint_address: string => "YarnEndpointAddress",
        /// Apache Zeppelin port for the remote Spark interpreter
        zeppelin_remote_spark_interpreter_port: value(i32) => "ZeppelinRemoteSparkInterpreterPort",
        number_of_nodes: value(i32) => "NumberOfNodes",
        worker_type: open_enum(WorkerType) => "WorkerType" [KnownEnum],
        glue_version: string => "GlueVersion" [Length(1, 255), Pattern(GLUE_VERSION)],
        number_of_workers: value(i32) => "NumberOfWorkers",
        availability_zone: string => "AvailabilityZone",
        vpc_id: string => "VpcId",
        extra_python_libs_s3_path: string => "ExtraPythonLibsS3Path",
        extra_jars_s3_path: string => "ExtraJarsS3Path",
        /// Reason for a failure, if any
        failure_reason: string => "FailureReason",
        security_configuration: string => "SecurityConfiguration" [Length(1, 255), Pattern(SINGLE_LINE)],
        created_timestamp: value(DateTime<Utc>) => "CreatedTimestamp",
        arguments: map => "Arguments" [Length(0, 100)],
    }
}

model_record! {
    /// A development endpoint, as returned by the service
    pub struct DevEndpoint {
        endpoint_name: string => "EndpointName",
        role_arn: string => "RoleArn" [Pattern(ROLE_ARN)],
        security_group_ids: list(String) => "SecurityGroupIds",
        subnet_id: string => "SubnetId",
        yarn_endpoint_address: string => "YarnEndpointAddress",
        /// Private IP address, only set inside a VPC
        private_address: string => "PrivateAddress",
        zeppelin_remote_spark_interpreter_port: value(i32) => "ZeppelinRemoteSparkInterpreterPort",
        /// Public IP address, only set outside a VPC
        public_address: string => "PublicAddress",
        status: string => "Status",
        worker_type: open_enum(WorkerType) => "WorkerType" [KnownEnum],
        glue_version: string => "GlueVersion" [Length(1, 255), Pattern(GLUE_VERSION)],
        number_of_workers: value(i32) => "NumberOfWorkers",
        number_of_nodes: value(i32) => "NumberOfNodes",
        availability_zone: string => "AvailabilityZone",
        vpc_id: string => "VpcId",
        extra_python_libs_s3_path: string => "ExtraPythonLibsS3Path",
        extra_jars_s3_path: string => "ExtraJarsS3Path",
        failure_reason: string => "FailureReason",
        last_update_status: string => "LastUpdateStatus",
        created_timestamp: value(DateTime<Utc>) => "CreatedTimestamp",
        last_modified_timestamp: value(DateTime<Utc>) => "LastModifiedTimestamp",
        public_key: string => "PublicKey",
        public_keys: list(String) => "PublicKeys" [Length(0, 5)],
        security_configuration: string => "SecurityConfiguration" [Length(1, 255), Pattern(SINGLE_LINE)],
        arguments: map => "Arguments" [Length(0, 100)],
    }
}
