// SPDX-License-Identifier: MPL-2.0
//! `panel-demo` drives the panel core from stdin, one command per line, and
//! prints every snapshot the controllers emit.
//!
//! The event loop waits on three sources: stdin, due measurement tickets and
//! resize signals. A resize announced from anywhere re-resolves the indicator
//! without waiting for the next command.

use panel_kit::application::port::{LayoutScheduler, TabGeometryRegistry};
use panel_kit::application::{CarouselViewport, GallerySession, TabIndicatorController, TabIndicatorState};
use panel_kit::config::{self, Config};
use panel_kit::domain::gallery::{ItemCollectionStore, ItemId, SourceRef};
use panel_kit::domain::profile::{TabId, TabRect, TabSet};
use panel_kit::infrastructure::{BroadcastResizeSource, GeometryMap, TokioLayoutScheduler};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::runtime::Handle;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
panel-demo [--config PATH] [--visible N] [SOURCES...]

Commands:
  next | prev                    move the carousel
  add <url-or-path>              simulate a chosen file
  load <path>                    read a file and add its bytes
  show <item-id>                 print one gallery item
  remove <item-id>               remove a gallery item
  items                          list gallery items
  select <tab> | hover <tab>     click / hover a tab
  leave                          pointer left the tab group
  measure <tab> <left> <width>   record a tab rectangle
  forget [tab]                   drop one tab rectangle, or all of them
  settle                         layout settled, re-resolve now
  resize                         announce a container resize
  tabs <a,b,c>                   replace the tab set
  help | quit
";

const SAMPLE_SOURCES: [&str; 5] = [
    "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1618556450991-2f1af64e8191?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1618556450994-a6a128ef0d9d?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1618556450994-a6a128ef0d9d?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1618556450994-a6a128ef0d9d?w=400&h=400&fit=crop",
];

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Next,
    Prev,
    Add(String),
    Load(PathBuf),
    Show(ItemId),
    Remove(ItemId),
    Items,
    Select(String),
    Hover(String),
    Leave,
    Measure { tab: String, left: f32, width: f32 },
    Forget(Option<String>),
    Settle,
    Resize,
    Tabs(Vec<String>),
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = words.collect();
    let arg = |name: &str| {
        rest.first()
            .map(|s| (*s).to_string())
            .ok_or_else(|| format!("{verb}: missing {name}"))
    };

    let command = match verb {
        "next" => Command::Next,
        "prev" | "previous" => Command::Prev,
        "add" => Command::Add(rest.join(" ")).non_empty()?,
        "load" => Command::Load(PathBuf::from(arg("path")?)),
        "show" | "remove" => {
            let raw = arg("item id")?;
            let id = raw.parse().map_err(|_| format!("{verb}: bad item id `{raw}`"))?;
            if verb == "show" {
                Command::Show(id)
            } else {
                Command::Remove(id)
            }
        }
        "items" => Command::Items,
        "select" => Command::Select(arg("tab")?),
        "hover" => Command::Hover(arg("tab")?),
        "leave" => Command::Leave,
        "measure" => {
            let [tab, left, width] = rest.as_slice() else {
                return Err("measure: expected <tab> <left> <width>".to_string());
            };
            let number = |s: &str| {
                s.parse::<f32>()
                    .map_err(|_| format!("measure: bad number `{s}`"))
            };
            Command::Measure {
                tab: (*tab).to_string(),
                left: number(*left)?,
                width: number(*width)?,
            }
        }
        "forget" => Command::Forget(rest.first().map(|s| (*s).to_string())),
        "settle" => Command::Settle,
        "resize" => Command::Resize,
        "tabs" => Command::Tabs(
            rest.join(" ")
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        ),
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command `{other}` (try `help`)")),
    };
    Ok(Some(command))
}

impl Command {
    fn non_empty(self) -> Result<Self, String> {
        match &self {
            Command::Add(source) if source.is_empty() => Err("add: missing source".to_string()),
            _ => Ok(self),
        }
    }
}

fn describe_viewport(viewport: &CarouselViewport) -> String {
    let range = viewport.visible_range();
    format!(
        "carousel: index={} showing={}..{} of {} prev={} next={}",
        viewport.current_index,
        range.start,
        range.end,
        viewport.item_count,
        if viewport.is_at_start { "disabled" } else { "enabled" },
        if viewport.is_at_end { "disabled" } else { "enabled" },
    )
}

fn describe_indicator(state: &TabIndicatorState) -> String {
    let geometry = state.geometry.map_or_else(
        || "unresolved".to_string(),
        |rect| format!("left={} width={} right={}", rect.left, rect.width, rect.right()),
    );
    format!(
        "indicator: {:?} content={} indicated={} {}",
        state.phase(),
        state.content_tab(),
        state.indicated_tab(),
        geometry,
    )
}

/// Everything a rendering layer would hold on to.
struct Demo {
    gallery: GallerySession,
    geometry: GeometryMap,
    resize: BroadcastResizeSource,
    indicator: TabIndicatorController,
}

impl Demo {
    fn new(config: &Config, sources: Vec<SourceRef>, scheduler: Box<dyn LayoutScheduler>) -> Self {
        let store = ItemCollectionStore::with_sources(sources);
        let gallery = GallerySession::new(store, config.visible_count());
        let resize = BroadcastResizeSource::new();
        let indicator =
            TabIndicatorController::mount(config.tab_set(), config.settle_delay(), scheduler, &resize);
        Self {
            gallery,
            geometry: GeometryMap::new(),
            resize,
            indicator,
        }
    }

    fn apply(&mut self, command: Command) -> Vec<String> {
        let mut out = Vec::new();
        match command {
            Command::Next => out.push(describe_viewport(&self.gallery.next())),
            Command::Prev => out.push(describe_viewport(&self.gallery.previous())),
            Command::Add(source) => {
                let (item, viewport) = self.gallery.on_file_chosen(SourceRef::guess(&source));
                out.push(format!("added {} ({})", item.id(), item.source()));
                out.push(describe_viewport(&viewport));
            }
            Command::Load(path) => match std::fs::read(&path) {
                Ok(bytes) => {
                    let source = SourceRef::Bytes(Arc::from(bytes));
                    let (item, viewport) = self.gallery.on_file_chosen(source);
                    out.push(format!("added {} ({})", item.id(), item.source()));
                    out.push(describe_viewport(&viewport));
                }
                Err(err) => out.push(format!("load: {}: {err}", path.display())),
            },
            Command::Show(id) => match self.gallery.item(id) {
                Some(item) => out.push(format!(
                    "{} #{} {}",
                    item.id(),
                    item.insertion_seq(),
                    item.source()
                )),
                None => out.push(format!("no item {id}")),
            },
            Command::Remove(id) => match self.gallery.remove_item(id) {
                Some((item, viewport)) => {
                    out.push(format!("removed {}", item.id()));
                    out.push(describe_viewport(&viewport));
                }
                None => out.push(format!("no item {id}")),
            },
            Command::Items => {
                let visible = self.gallery.viewport().visible_range();
                for (index, item) in self.gallery.items().iter().enumerate() {
                    let marker = if visible.contains(&index) { '*' } else { ' ' };
                    out.push(format!("{marker} {} {}", item.id(), item.source()));
                }
            }
            Command::Select(tab) => {
                out.push(self.report(|indicator, geometry| indicator.select_tab(&tab, geometry)));
            }
            Command::Hover(tab) => {
                out.push(self.report(|indicator, geometry| indicator.preview_tab(&tab, geometry)));
            }
            Command::Leave => {
                out.push(describe_indicator(&self.indicator.clear_preview(&self.geometry)));
            }
            Command::Measure { tab, left, width } => {
                self.geometry.record(TabId::new(tab), TabRect::new(left, width));
                out.push(format!("{} tab(s) measured", self.geometry_len()));
            }
            Command::Forget(tab) => {
                match tab {
                    Some(tab) => {
                        self.geometry.forget(&TabId::new(tab));
                    }
                    None => self.geometry.clear(),
                }
                if self.geometry.is_empty() {
                    out.push("no tab measured".to_string());
                } else {
                    out.push(format!("{} rectangle(s) recorded", self.geometry.len()));
                }
            }
            Command::Settle => {
                out.push(describe_indicator(&self.indicator.on_layout_settled(&self.geometry)));
            }
            Command::Resize => self.resize.notify(),
            Command::Tabs(ids) => match TabSet::new(ids) {
                Some(tabs) => out.push(describe_indicator(&self.indicator.set_tab_set(tabs))),
                None => out.push("tabs: need at least one tab".to_string()),
            },
            Command::Help => out.push(HELP.trim_end().to_string()),
            Command::Quit => {}
        }
        if let Some(state) = self.indicator.poll_resize(&self.geometry) {
            out.push(describe_indicator(&state));
        }
        out
    }

    fn report<F>(&mut self, transition: F) -> String
    where
        F: FnOnce(
            &mut TabIndicatorController,
            &GeometryMap,
        ) -> panel_kit::error::Result<TabIndicatorState>,
    {
        match transition(&mut self.indicator, &self.geometry) {
            Ok(state) => describe_indicator(&state),
            Err(err) => format!("rejected: {err}"),
        }
    }

    fn geometry_len(&self) -> usize {
        self.indicator
            .tabs()
            .iter()
            .filter(|tab| self.geometry.lookup(tab).is_some())
            .count()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }
    init_tracing();

    let config_path: Option<PathBuf> = args.opt_value_from_str("--config")?;
    let visible: Option<usize> = args.opt_value_from_str("--visible")?;
    let mut sources: Vec<SourceRef> = args
        .finish()
        .into_iter()
        .filter_map(|arg| arg.into_string().ok())
        .map(|arg| SourceRef::guess(&arg))
        .collect();
    if sources.is_empty() {
        sources = SAMPLE_SOURCES.iter().map(|url| SourceRef::Url((*url).to_string())).collect();
    }

    let mut config = match config_path {
        Some(path) => config::load_from_path(&path)?,
        None => config::load().unwrap_or_default(),
    };
    if visible.is_some() {
        config.visible_count = visible;
    }

    let (scheduler, mut due) = TokioLayoutScheduler::new(Handle::current());
    let mut demo = Demo::new(&config, sources, Box::new(scheduler));
    let mut resizes = demo.resize.watch();
    println!("{}", describe_viewport(&demo.gallery.viewport()));
    println!("{}", describe_indicator(&demo.indicator.state()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_command(&line) {
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(command)) => {
                        for output in demo.apply(command) {
                            println!("{output}");
                        }
                    }
                    Ok(None) => {}
                    Err(message) => eprintln!("{message}"),
                }
            }
            Some(ticket) = due.recv() => {
                if let Some(state) = demo.indicator.on_measurement_due(ticket, &demo.geometry) {
                    println!("{}", describe_indicator(&state));
                }
            }
            true = resizes.resized() => {
                if let Some(state) = demo.indicator.poll_resize(&demo.geometry) {
                    println!("{}", describe_indicator(&state));
                }
            }
        }
    }

    demo.indicator.dispose();
    Ok(())
}
