use std::collections::HashMap;

use tracing::debug;

use super::Message;
use crate::error::{GreeterError, GreeterResult};

pub fn parse_message(line: &str) -> GreeterResult<Message> {
    debug!("Attempting to parse message: {:?}", line);
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return Err(GreeterError::Parse("Empty message".to_string()));
    }

    let mut tags = HashMap::new();
    let mut rest = line;

    // Parse tags if present
    if let Some(tagged) = line.strip_prefix('@') {
        let (tag_str, after) = tagged
            .split_once(' ')
            .ok_or_else(|| GreeterError::Parse("Failed to parse message tags".to_string()))?;

        for tag in tag_str.split(';') {
            match tag.split_once('=') {
                Some((key, value)) => tags.insert(key.to_string(), value.to_string()),
                None => tags.insert(tag.to_string(), String::new()),
            };
        }

        rest = after.trim_start();
    }

    let (source, rest) = match rest.strip_prefix(':') {
        Some(prefixed) => {
            let (source, after) = prefixed
                .split_once(' ')
                .ok_or_else(|| GreeterError::Parse("Missing command after source".to_string()))?;
            (Some(source.to_string()), after.trim_start())
        }
        None => (None, rest),
    };

    let (command, param_str) = match rest.split_once(' ') {
        Some((command, params)) => (command, Some(params)),
        None => (rest, None),
    };
    if command.is_empty() {
        return Err(GreeterError::Parse("Missing command".to_string()));
    }

    let params = param_str.map(parse_params).unwrap_or_default();

    Ok(Message {
        tags,
        source,
        command: command.to_ascii_uppercase(),
        params,
    })
}

fn parse_params(param_str: &str) -> Vec<String> {
    let mut params = Vec::new();
    let mut rest = param_str;

    loop {
        rest = rest.trim_start_matches(' ');
        if rest.is_empty() {
            break;
        }
        if let Some(trailing) = rest.strip_prefix(':') {
            params.push(trailing.to_string());
            break;
        }
        match rest.split_once(' ') {
            Some((param, after)) => {
                params.push(param.to_string());
                rest = after;
            }
            None => {
                params.push(rest.to_string());
                break;
            }
        }
    }

    params
}
