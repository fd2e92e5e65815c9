// ABOUTME: App orchestrator — wires config, HTTP client, terminal, and the ChatWidget event loop.
// ABOUTME: Requests run on spawned tasks; replies come back to the loop over an mpsc channel.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;
use tracing::info;

use crate::api::{ChatClient, ChatError, ChatReply, ChatRequest, HttpChatClient};
use crate::config::Config;
use crate::i18n::Language;
use crate::tui::input::{self, InputResult};
use crate::tui::terminal::{self, EventHandler, TermEvent, Tui};
use crate::tui::ui;
use crate::tui::widget::ChatWidget;

type Reply = Result<ChatReply, ChatError>;

/// Top-level application that owns the configuration and runs the TUI.
pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the application until the user quits.
    pub async fn run(self) -> anyhow::Result<()> {
        let endpoint = self.config.endpoint_url()?;
        let client: Arc<dyn ChatClient> = Arc::new(HttpChatClient::new(
            endpoint.clone(),
            self.config.request_timeout(),
        )?);
        info!(%endpoint, lang = %self.config.language, "starting chat");

        let endpoint_label = match endpoint.port() {
            Some(port) => format!("{}:{}", endpoint.host_str().unwrap_or_default(), port),
            None => endpoint.host_str().unwrap_or_default().to_string(),
        };

        let mut widget = ChatWidget::new(self.config.language);
        let session_start = Instant::now();

        terminal::install_panic_hook();
        let mut tui = terminal::init()?;
        let result = event_loop(&mut tui, &mut widget, client, &endpoint_label).await;
        terminal::restore()?;

        print_exit_screen(&widget, session_start);
        result
    }
}

/// Runs chat requests on their own tasks and hands the replies back in order
/// of completion.
pub struct Requests {
    client: Arc<dyn ChatClient>,
    reply_tx: mpsc::UnboundedSender<Reply>,
    reply_rx: mpsc::UnboundedReceiver<Reply>,
}

impl Requests {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();
        Self {
            client,
            reply_tx,
            reply_rx,
        }
    }

    /// Issue `request` on a spawned task.
    pub fn start(&self, request: ChatRequest) {
        let client = Arc::clone(&self.client);
        let tx = self.reply_tx.clone();
        tokio::spawn(async move {
            let reply = client.ask(&request).await;
            let _ = tx.send(reply);
        });
    }

    /// Wait for the next finished request.
    pub async fn next_reply(&mut self) -> Option<Reply> {
        self.reply_rx.recv().await
    }
}

/// Act on the result of an input event. Returns false when the app should quit.
pub fn dispatch(action: InputResult, requests: &Requests) -> bool {
    match action {
        InputResult::None => true,
        InputResult::Quit => false,
        InputResult::Send(request) => {
            requests.start(request);
            true
        }
    }
}

/// Draw, then wait for either a terminal event or a reply, until quit.
async fn event_loop(
    tui: &mut Tui,
    widget: &mut ChatWidget,
    client: Arc<dyn ChatClient>,
    endpoint_label: &str,
) -> anyhow::Result<()> {
    let mut events = EventHandler::new();
    let mut requests = Requests::new(client);

    loop {
        tui.draw(|frame| ui::render(frame, widget, endpoint_label))?;

        tokio::select! {
            event = events.next() => {
                let Some(event) = event else { break };
                let action = match event {
                    TermEvent::Key(key) => input::handle_key(widget, key),
                    TermEvent::Mouse(mouse) => input::handle_mouse(widget, mouse),
                    TermEvent::Paste(text) => input::handle_paste(widget, &text),
                    TermEvent::Resize => InputResult::None,
                };
                if !dispatch(action, &requests) {
                    break;
                }
            }
            Some(reply) = requests.next_reply() => widget.finish_send(reply),
        }
    }

    Ok(())
}

/// Print a short summary after the TUI exits.
fn print_exit_screen(widget: &ChatWidget, session_start: Instant) {
    let elapsed_secs = session_start.elapsed().as_secs();
    let farewell = match widget.language {
        Language::Fr => "Merci et à bientôt !",
        Language::En => "Thanks, see you soon!",
    };
    println!();
    println!("  {farewell}");
    println!(
        "  {}m {:02}s, {} {}",
        elapsed_secs / 60,
        elapsed_secs % 60,
        widget.messages.len(),
        widget.language.strings().messages
    );
    println!();
}
