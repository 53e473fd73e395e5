//! Line-driven chat simulation
//!
//! Reads lines of the form `<player-id> /command [arg]`, feeds them to a
//! `Bot` and writes every reply and expiry notice. Useful for trying the bot
//! without a chat platform.

use crate::host::{Bot, ChatCommand, DefinitionLookup, PlayerId, ServerId, WordSource};
use log::warn;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Run the chat loop until the reader is exhausted or a line says `quit`
///
/// # Errors
///
/// Returns an I/O error if reading input or writing output fails.
pub fn run_chat<S, D, R, W>(
    bot: &mut Bot<S, D>,
    server: ServerId,
    reader: R,
    mut writer: W,
) -> io::Result<()>
where
    S: WordSource,
    D: DefinitionLookup,
    R: BufRead,
    W: Write,
{
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") {
            break;
        }

        let now = Instant::now();
        for notice in bot.sweep(now) {
            writeln!(writer, "[notice → {}] {}", notice.player, notice.text)?;
        }

        let Some((player, command)) = line.split_once(char::is_whitespace) else {
            writeln!(writer, "Expected `<player-id> /command [arg]`")?;
            continue;
        };
        let Ok(player) = player.parse::<PlayerId>() else {
            warn!("ignoring line with bad player id: {line}");
            writeln!(writer, "'{player}' is not a player id")?;
            continue;
        };

        match command.parse::<ChatCommand>() {
            Ok(command) => {
                let reply = bot.handle(player, server, command, now);
                let scope = if reply.ephemeral { " (only you)" } else { "" };
                writeln!(writer, "[reply → {player}{scope}]\n{}\n", reply.text)?;
            }
            Err(err) => writeln!(writer, "[reply → {player} (only you)] {err}")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{BotConfig, NoDefinitions, WordList};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn run(input: &str) -> String {
        let mut bot = Bot::with_rng(
            BotConfig::default(),
            ["apple"].iter().collect::<WordList>(),
            NoDefinitions,
            StdRng::seed_from_u64(0),
        );
        let mut output = Vec::new();
        run_chat(&mut bot, 1, Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn chat_plays_a_full_game() {
        let output = run("42 /startwordle\n42 /guessword zzzzz\n42 /guessword apple\n");

        assert!(output.contains("[reply → 42]\nWordle game started with 5-letter words!"));
        assert!(output.contains("[reply → 42 (only you)]\nNot a valid word."));
        assert!(output.contains("✅ Correct! The word was **apple**."));
    }

    #[test]
    fn chat_reports_bad_lines() {
        let output = run("# comment\n\nhello\nbob /stats\n42 /dance\n");

        assert!(output.contains("Expected `<player-id> /command [arg]`"));
        assert!(output.contains("'bob' is not a player id"));
        assert!(output.contains("Unknown command `/dance`"));
    }

    #[test]
    fn chat_stops_at_quit() {
        let output = run("quit\n42 /helpwordle\n");
        assert!(output.is_empty());
    }
}
