use crate::domain::{
    LocalId, MakeTts, MessageBody, MessageType, Receptor, Template, VerifyLookup, VerifyToken,
    VerifyToken10, VerifyToken20,
};

pub fn encode_verify_lookup_params(request: &VerifyLookup) -> Vec<(String, String)> {
    let mut params = vec![
        (
            Receptor::FIELD.to_owned(),
            request.receptor().as_str().to_owned(),
        ),
        (
            Template::FIELD.to_owned(),
            request.template().as_str().to_owned(),
        ),
        (
            VerifyToken::FIELD.to_owned(),
            request.token().as_str().to_owned(),
        ),
    ];

    let options = request.options();
    if let Some(token2) = options.token2.as_ref() {
        params.push(("token2".to_owned(), token2.as_str().to_owned()));
    }
    if let Some(token3) = options.token3.as_ref() {
        params.push(("token3".to_owned(), token3.as_str().to_owned()));
    }
    if let Some(token10) = options.token10.as_ref() {
        params.push((VerifyToken10::FIELD.to_owned(), token10.as_str().to_owned()));
    }
    if let Some(token20) = options.token20.as_ref() {
        params.push((VerifyToken20::FIELD.to_owned(), token20.as_str().to_owned()));
    }
    if let Some(message_type) = options.message_type {
        params.push((
            MessageType::FIELD.to_owned(),
            message_type.code().to_string(),
        ));
    }

    params
}

pub fn encode_make_tts_params(request: &MakeTts) -> Vec<(String, String)> {
    let mut params = vec![
        (
            Receptor::FIELD.to_owned(),
            request.receptor().as_str().to_owned(),
        ),
        (
            MessageBody::FIELD.to_owned(),
            request.message().as_str().to_owned(),
        ),
    ];
    if let Some(date) = request.date() {
        params.push(("date".to_owned(), date.value().to_string()));
    }
    if let Some(localids) = request.localids() {
        let joined = localids
            .iter()
            .map(LocalId::as_str)
            .collect::<Vec<_>>()
            .join(",");
        params.push((LocalId::FIELD.to_owned(), joined));
    }
    params
}
