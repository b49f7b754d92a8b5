use super::commands::{REPLY_NOT_FOUND, REPLY_SUCCESS};
use crate::error::GreeterError;
use crate::test_helpers::test::test_handler;

#[tokio::test]
async fn test_join_without_match_is_silent() {
    let greeter = test_handler(true);
    assert_eq!(greeter.on_join("#chan", "alice!a@host").await, None);
    assert!(greeter.handle_line(":alice!a@host JOIN #chan").await.is_none());
}

#[tokio::test]
async fn test_join_replies_with_greeting() {
    let greeter = test_handler(true);
    greeter.cmd_add("#chan", "alice!*@*", "Welcome back!").await.unwrap();

    assert_eq!(
        greeter.on_join("#chan", "alice!a@host").await.as_deref(),
        Some("Welcome back!")
    );

    let reply = greeter.handle_line(":Alice!a@host JOIN #chan").await.unwrap();
    assert_eq!(reply.to_string(), "PRIVMSG #chan :Alice: Welcome back!");
}

#[tokio::test]
async fn test_join_reply_without_nick_prefix() {
    let greeter = test_handler(false);
    greeter.cmd_add("#chan", "*!*@*", "hi all").await.unwrap();

    let reply = greeter.handle_line(":bob!b@host JOIN #chan").await.unwrap();
    assert_eq!(reply.to_string(), "PRIVMSG #chan :hi all");
}

#[tokio::test]
async fn test_non_join_lines_ignored() {
    let greeter = test_handler(true);
    greeter.cmd_add("#chan", "*!*@*", "hi").await.unwrap();

    assert!(greeter.handle_line(":bob!b@host PRIVMSG #chan :hello").await.is_none());
    assert!(greeter.handle_line("PING :server").await.is_none());
    assert!(greeter.handle_line("").await.is_none());
    // server-sourced or bare-nick JOINs carry no hostmask
    assert!(greeter.handle_line(":irc.example.com JOIN #chan").await.is_none());
    assert!(greeter.handle_line(":bob!b@host JOIN").await.is_none());
}

#[tokio::test]
async fn test_add_reports_success_and_replaces() {
    let greeter = test_handler(true);
    assert_eq!(greeter.cmd_add("#chan", "a!*@*", "one").await.unwrap(), REPLY_SUCCESS);
    assert_eq!(greeter.cmd_add("#chan", "a!*@*", "two").await.unwrap(), REPLY_SUCCESS);
    assert_eq!(greeter.cmd_list("#chan").await.unwrap(), "a!*@*: 'two'");
}

#[tokio::test]
async fn test_remove_reports_not_found() {
    let greeter = test_handler(true);
    greeter.cmd_add("#chan", "a!*@*", "one").await.unwrap();

    assert_eq!(greeter.cmd_remove("#chan", "b!*@*").await.unwrap(), REPLY_NOT_FOUND);
    assert_eq!(greeter.cmd_remove("#chan", "a!*@*").await.unwrap(), REPLY_SUCCESS);
    assert_eq!(greeter.cmd_remove("#chan", "a!*@*").await.unwrap(), REPLY_NOT_FOUND);
}

#[tokio::test]
async fn test_list_and_get_formatting() {
    let greeter = test_handler(true);
    assert_eq!(greeter.cmd_list("#chan").await.unwrap(), "");

    greeter.cmd_add("#chan", "*!*@*.example.com", "domain").await.unwrap();
    greeter.cmd_add("#chan", "bob!*@*", "bob").await.unwrap();
    greeter.cmd_add("#chan", "alice!*@*", "alice").await.unwrap();

    assert_eq!(
        greeter.cmd_list("#chan").await.unwrap(),
        "*!*@*.example.com: 'domain', bob!*@*: 'bob', and alice!*@*: 'alice'"
    );
    assert_eq!(
        greeter.cmd_get("#chan", "alice!a@irc.example.com").await.unwrap(),
        "*!*@*.example.com: 'domain' and alice!*@*: 'alice'"
    );
    assert_eq!(greeter.cmd_get("#chan", "carol!c@elsewhere.org").await.unwrap(), "");
}

#[tokio::test]
async fn test_invalid_arguments_rejected() {
    let greeter = test_handler(true);

    assert!(matches!(
        greeter.cmd_add("chan", "a!*@*", "hi").await,
        Err(GreeterError::Validation(_))
    ));
    assert!(matches!(
        greeter.cmd_add("#chan", "alice", "hi").await,
        Err(GreeterError::Validation(_))
    ));
    assert!(matches!(
        greeter.cmd_get("#chan", "a@b").await,
        Err(GreeterError::Validation(_))
    ));
    assert!(matches!(
        greeter.cmd_add("#chan", "a!*@*", "hi\r\nQUIT :bye").await,
        Err(GreeterError::Validation(_))
    ));
    assert_eq!(greeter.cmd_list("#chan").await.unwrap(), "");
}
