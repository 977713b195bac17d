//! Catalog connections

use crate::model_record;
use crate::types::ConnectionType;
use crate::validate::patterns::{MULTI_LINE, SINGLE_LINE};
use crate::validate::Constraint::{KnownEnum, Length, Pattern};
use chrono::{DateTime, Utc};

model_record! {
    /// Network requirements for reaching a connection's data store
    pub struct PhysicalConnectionRequirements {
        subnet_id: string => "SubnetId" [Length(1, 255), Pattern(SINGLE_LINE)],
        security_group_id_list: list(String) => "SecurityGroupIdList" [Length(0, 50)],
        availability_zone: string => "AvailabilityZone" [Length(1, 255), Pattern(SINGLE_LINE)],
    }
}

model_record! {
    /// A connection definition
    ///
    /// `ConnectionProperties` keys are usually [`ConnectionPropertyKey`]
    /// values; `add_connection_properties_entry` accepts either the key enum
    /// or a raw string.
    ///
    /// [`ConnectionPropertyKey`]: crate::types::ConnectionPropertyKey
    pub struct Connection {
        /// Name of the connection definition
        name: string => "Name" [Length(1, 255), Pattern(SINGLE_LINE)],
        description: string => "Description" [Length(0, 2048), Pattern(MULTI_LINE)],
        /// Type of the connection. Only JDBC is fully supported by the service.
        connection_type: open_enum(ConnectionType) => "ConnectionType" [KnownEnum],
        /// Criteria that can be used in selecting this connection
        match_criteria: list(String) => "MatchCriteria" [Length(0, 10)],
        /// Key/value parameters of the connection (host, credentials, URL...)
        connection_properties: map => "ConnectionProperties" [Length(0, 100)],
        physical_connection_requirements: record(PhysicalConnectionRequirements) => "PhysicalConnectionRequirements",
        creation_time: value(DateTime<Utc>) => "CreationTime",
        last_updated_time: value(DateTime<Utc>) => "LastUpdatedTime",
        /// User, group or role that last updated this definition
        last_updated_by: string => "LastUpdatedBy" [Length(1, 255), Pattern(SINGLE_LINE)],
    }
}
