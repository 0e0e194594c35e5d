use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RData, RecordType};

pub fn query_message(id: u16, name: &str, class: DNSClass, record_type: RecordType) -> Message {
    let mut query = Query::query(Name::from_ascii(name).unwrap(), record_type);
    query.set_query_class(class);

    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true)
        .add_query(query);
    message
}

pub fn hesiod_query(id: u16, name: &str) -> Message {
    query_message(id, name, DNSClass::HS, RecordType::TXT)
}

pub fn to_bytes(message: &Message) -> Vec<u8> {
    message.to_vec().unwrap()
}

pub fn parse(bytes: &[u8]) -> Message {
    Message::from_vec(bytes).unwrap()
}

/// The single character-string of every TXT answer, in answer order.
pub fn txt_values(message: &Message) -> Vec<String> {
    message
        .answers()
        .iter()
        .map(|record| match record.data() {
            Some(RData::TXT(txt)) => {
                assert_eq!(txt.txt_data().len(), 1, "expected one character-string");
                String::from_utf8(txt.txt_data()[0].to_vec()).unwrap()
            }
            other => panic!("expected TXT rdata, got {:?}", other),
        })
        .collect()
}
