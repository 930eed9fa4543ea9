use std::io::{self, Write};

use anyhow::Result;

use mindspace_chat::{ChatBackend, ChatSession, HttpChatBackend, SUGGESTIONS, Sender};
use mindspace_config::AppConfig;

use crate::describe_mood;

const DEFAULT_HISTORY_LINES: usize = 10;

pub(crate) async fn run_chat_session(config: &AppConfig) -> Result<()> {
    let backend = HttpChatBackend::new(&config.chat)?;
    tracing::info!(api_url = backend.api_url(), "chat backend configured");
    let mut chat = ChatSession::new(backend, config);

    println!("Welcome to MindSpace");
    println!("I'm here to provide a safe space for you to share your thoughts and feelings.");
    println!("How can I support you today?");
    print_suggestions();
    println!("type /help for commands");

    let stdin = io::stdin();
    loop {
        print!("you> ");
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = stdin.read_line(&mut line)?;
        if bytes == 0 {
            println!("session closed");
            break;
        }
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if line == "/exit" {
            println!("session closed");
            break;
        }

        if line == "/help" {
            println!("/help");
            println!("/mood        -- show the current mood");
            println!("/history [n] -- show the last n messages (default {DEFAULT_HISTORY_LINES})");
            println!("/suggest <n> -- send suggestion number n");
            println!("/clear       -- forget this conversation");
            println!("/exit");
            continue;
        }

        if line == "/mood" {
            println!("{}", describe_mood(chat.mood()));
            continue;
        }

        if let Some(arg) = line.strip_prefix("/history") {
            let n = arg.trim().parse().unwrap_or(DEFAULT_HISTORY_LINES);
            print_history(&chat, n);
            continue;
        }

        if line == "/clear" {
            chat.clear();
            println!("conversation cleared");
            print_suggestions();
            continue;
        }

        if let Some(arg) = line.strip_prefix("/suggest") {
            let picked = arg
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|index| SUGGESTIONS.get(index));
            match picked {
                Some(text) => {
                    println!("you> {text}");
                    submit(&mut chat, text).await?;
                }
                None => println!("usage: /suggest <1-{}>", SUGGESTIONS.len()),
            }
            continue;
        }

        submit(&mut chat, line).await?;
    }

    Ok(())
}

async fn submit<B: ChatBackend>(chat: &mut ChatSession<B>, text: &str) -> Result<()> {
    if let Some(reply) = chat.send(text).await? {
        if reply.mood_changed {
            println!("[{}]", describe_mood(reply.mood));
        }
        println!("mindspace> {}", reply.text);
    }
    Ok(())
}

fn print_history<B: ChatBackend>(chat: &ChatSession<B>, n: usize) {
    let turns = chat.history().recent(n);
    if turns.is_empty() {
        println!("no messages yet");
        return;
    }
    for turn in turns {
        let who = match turn.sender {
            Sender::User => "you",
            Sender::Ai => "mindspace",
        };
        println!("  [{}] {who}> {}", turn.timestamp.format("%H:%M"), turn.text);
    }
}

fn print_suggestions() {
    for (i, suggestion) in SUGGESTIONS.iter().enumerate() {
        println!("  {}. {suggestion}", i + 1);
    }
}
