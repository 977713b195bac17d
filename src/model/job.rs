//! Jobs and job runs

use crate::model_record;
use crate::types::{JobRunState, WorkerType};
use crate::validate::patterns::{GLUE_VERSION, MULTI_LINE, SINGLE_LINE};
use crate::validate::Constraint::{KnownEnum, Length, Min, Pattern};
use chrono::{DateTime, Utc};

model_record! {
    /// Notification behavior of a job run
    pub struct NotificationProperty {
        /// Minutes to wait after a run starts before sending a delay
        /// notification
        notify_delay_after: value(i32) => "NotifyDelayAfter" [Min(1.0)],
    }
}

model_record! {
    /// A job run that triggered this run
    pub struct Predecessor {
        job_name: string => "JobName" [Length(1, 255), Pattern(SINGLE_LINE)],
        run_id: string => "RunId" [Length(1, 255), Pattern(SINGLE_LINE)],
    }
}

model_record! {
    /// Maximum concurrency of a job
    pub struct ExecutionProperty {
        max_concurrent_runs: value(i32) => "MaxConcurrentRuns",
    }
}

model_record! {
    /// Code a job executes
    pub struct JobCommand {
        /// `glueetl`, `pythonshell` or `gluestreaming`
        name: string => "Name",
        /// S3 path to the script
        script_location: string => "ScriptLocation" [Length(0, 400_000)],
        python_version: string => "PythonVersion" [Pattern(r"^[2-3]$")],
    }
}

model_record! {
    /// Connections used by a job
    pub struct ConnectionsList {
        connections: list(String) => "Connections",
    }
}

model_record! {
    /// A single run of a job
    pub struct JobRun {
        /// ID of this job run
        id: string => "Id" [Length(1, 255), Pattern(SINGLE_LINE)],
        /// Number of the attempt to run this job
        attempt: value(i32) => "Attempt",
        /// ID of the previous run of this job, for retries
        previous_run_id: string => "PreviousRunId" [Length(1, 255), Pattern(SINGLE_LINE)],
        trigger_name: string => "TriggerName" [Length(1, 255), Pattern(SINGLE_LINE)],
        job_name: string => "JobName" [Length(1, 255), Pattern(SINGLE_LINE)],
        started_on: value(DateTime<Utc>) => "StartedOn",
        last_modified_on: value(DateTime<Utc>) => "LastModifiedOn",
        completed_on: value(DateTime<Utc>) => "CompletedOn",
        job_run_state: open_enum(JobRunState) => "JobRunState" [KnownEnum],
        /// Job arguments for this run, overriding the job's defaults
        arguments: map => "Arguments",
        error_message: string => "ErrorMessage",
        predecessor_runs: list(Predecessor) => "PredecessorRuns",
        /// Deprecated in favor of `MaxCapacity`
        allocated_capacity: value(i32) => "AllocatedCapacity",
        /// Seconds the run consumed resources
        execution_time: value(i32) => "ExecutionTime",
        /// Minutes before the run is terminated with `TIMEOUT`
        timeout: value(i32) => "Timeout" [Min(1.0)],
        /// Data processing units allocated to the run
        max_capacity: value(f64) => "MaxCapacity",
        worker_type: open_enum(WorkerType) => "WorkerType" [KnownEnum],
        number_of_workers: value(i32) => "NumberOfWorkers",
        security_configuration: string => "SecurityConfiguration" [Length(1, 255), Pattern(SINGLE_LINE)],
        /// CloudWatch log group for secure logging
        log_group_name: string => "LogGroupName",
        notification_property: record(NotificationProperty) => "NotificationProperty",
        glue_version: string => "GlueVersion" [Length(1, 255), Pattern(GLUE_VERSION)],
    }
}

model_record! {
    /// Request to start a run of a job
    pub struct StartJobRunRequest {
        job_name: string => "JobName" [Length(1, 255), Pattern(SINGLE_LINE)],
        /// ID of a previous run to retry
        job_run_id: string => "JobRunId" [Length(1, 255), Pattern(SINGLE_LINE)],
        arguments: map => "Arguments",
        allocated_capacity: value(i32) => "AllocatedCapacity",
        timeout: value(i32) => "Timeout" [Min(1.0)],
        max_capacity: value(f64) => "MaxCapacity",
        security_configuration: string => "SecurityConfiguration" [Length(1, 255), Pattern(SINGLE_LINE)],
        notification_property: record(NotificationProperty) => "NotificationProperty",
        worker_type: open_enum(WorkerType) => "WorkerType" [KnownEnum],
        number_of_workers: value(i32) => "NumberOfWorkers",
    }
}

model_record! {
    /// Request to create a job definition
    pub struct CreateJobRequest {
        /// Unique name for the job
        name: string => "Name" [Length(1, 255), Pattern(SINGLE_LINE)],
        description: string => "Description" [Length(0, 2048), Pattern(MULTI_LINE)],
        /// Not used by the service
        log_uri: string => "LogUri",
        /// IAM role name or ARN
        role: string => "Role",
        execution_property: record(ExecutionProperty) => "ExecutionProperty",
        command: record(JobCommand) => "Command",
        default_arguments: map => "DefaultArguments",
        /// Arguments a job run cannot override
        non_overridable_arguments: map => "NonOverridableArguments",
        connections: record(ConnectionsList) => "Connections",
        max_retries: value(i32) => "MaxRetries",
        allocated_capacity: value(i32) => "AllocatedCapacity",
        timeout: value(i32) => "Timeout" [Min(1.0)],
        max_capacity: value(f64) => "MaxCapacity",
        security_configuration: string => "SecurityConfiguration" [Length(1, 255), Pattern(SINGLE_LINE)],
        tags: map => "Tags" [Length(0, 50)],
        notification_property: record(NotificationProperty) => "NotificationProperty",
        glue_version: string => "GlueVersion" [Length(1, 255), Pattern(GLUE_VERSION)],
        number_of_workers: value(i32) => "NumberOfWorkers",
        worker_type: open_enum(WorkerType) => "WorkerType" [KnownEnum],
    }
}
