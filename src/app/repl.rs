use crate::app::commands::{Command, HELP};
use crate::app::view::{render_catalog, render_team};
use crate::core::session::TeamSession;
use crate::core::Storage;
use crate::utils::error::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Show(String),
    Quit,
}

/// Applies one command to the session and describes the result.
pub async fn dispatch<S: Storage>(session: &mut TeamSession<S>, command: Command) -> Result<Reply> {
    let theme = session.theme();
    let reply = match command {
        Command::List => render_catalog(session.catalog(), session.team(), theme),
        Command::Team => render_team(session.team(), theme),
        Command::Toggle(id) => {
            let team = session.toggle(id)?;
            render_team(team, theme)
        }
        Command::Remove(id) => render_team(session.remove(id), theme),
        Command::Export(file_name) => {
            let written = session.export(file_name.as_deref()).await?;
            format!("Team saved to {}\n", written)
        }
        Command::Import(path) => {
            let team = session.import_file(&path).await?;
            render_team(team, theme)
        }
        Command::Theme => format!("Theme: {}\n", session.toggle_theme()),
        Command::Help => format!("{}\n", HELP),
        Command::Quit => return Ok(Reply::Quit),
    };
    Ok(Reply::Show(reply))
}

/// Reads commands line by line until `quit` or end of input. Recoverable
/// errors are reported to `output` and the loop continues.
pub async fn run<S, R, W>(session: &mut TeamSession<S>, input: R, mut output: W) -> Result<()>
where
    S: Storage,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    output
        .write_all(render_team(session.team(), session.theme()).as_bytes())
        .await?;

    loop {
        output.write_all(b"> ").await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let result = match line.parse::<Command>() {
            Ok(command) => dispatch(session, command).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(Reply::Show(text)) => output.write_all(text.as_bytes()).await?,
            Ok(Reply::Quit) => break,
            Err(e) if e.is_recoverable() => {
                tracing::debug!("Command '{}' failed: {} ({:?})", line.trim(), e, e.category());
                let message = format!("❌ {}\n💡 {}\n", e.user_friendly_message(), e.recovery_suggestion());
                output.write_all(message.as_bytes()).await?;
            }
            Err(e) => return Err(e),
        }
    }

    output.flush().await?;
    Ok(())
}
