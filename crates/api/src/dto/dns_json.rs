//! BOSH DNS HTTP JSON wire format.
//!
//! Field names and their capitalisation are fixed by the consumer.

use hickory_proto::op::ResponseCode;
use hickory_proto::rr::RecordType;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

const ANSWER_TTL: u32 = 0;
const EDNS_CLIENT_SUBNET: &str = "0.0.0.0/0";

const DEFAULT_QUERY_TYPE: &str = "1";

#[derive(Debug, Deserialize)]
pub struct DnsQueryParams {
    #[serde(rename = "type")]
    pub query_type: Option<String>,
    pub name: Option<String>,
}

impl DnsQueryParams {
    /// A missing or empty `type` means an A query.
    pub fn query_type(&self) -> &str {
        match self.query_type.as_deref() {
            None | Some("") => DEFAULT_QUERY_TYPE,
            Some(query_type) => query_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsQuestion {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsAnswer {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: u16,
    #[serde(rename = "TTL")]
    pub ttl: u32,
    pub data: String,
}

impl DnsAnswer {
    pub fn a_record(name: &str, ip: IpAddr) -> Self {
        Self {
            name: name.to_string(),
            record_type: u16::from(RecordType::A),
            ttl: ANSWER_TTL,
            data: ip.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsJsonResponse {
    #[serde(rename = "Status")]
    pub status: u16,
    #[serde(rename = "TC")]
    pub truncated: bool,
    #[serde(rename = "RD")]
    pub recursion_desired: bool,
    #[serde(rename = "RA")]
    pub recursion_available: bool,
    #[serde(rename = "AD")]
    pub authentic_data: bool,
    #[serde(rename = "CD")]
    pub checking_disabled: bool,
    #[serde(rename = "Question")]
    pub question: Vec<DnsQuestion>,
    #[serde(rename = "Answer")]
    pub answer: Vec<DnsAnswer>,
    #[serde(rename = "Additional")]
    pub additional: Vec<DnsAnswer>,
    pub edns_client_subnet: String,
}

impl DnsJsonResponse {
    fn new(code: ResponseCode, question: DnsQuestion, answer: Vec<DnsAnswer>) -> Self {
        Self {
            status: u16::from(code),
            truncated: false,
            recursion_desired: false,
            recursion_available: false,
            authentic_data: false,
            checking_disabled: false,
            question: vec![question],
            answer,
            additional: Vec::new(),
            edns_client_subnet: EDNS_CLIENT_SUBNET.to_string(),
        }
    }

    pub fn no_error(question: DnsQuestion, answer: Vec<DnsAnswer>) -> Self {
        Self::new(ResponseCode::NoError, question, answer)
    }

    pub fn server_failure(question: DnsQuestion) -> Self {
        Self::new(ResponseCode::ServFail, question, Vec::new())
    }
}
