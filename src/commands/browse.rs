//! # browse 命令实现
//!
//! 交互式结果浏览。单线程、同步：每读入一行输入，
//! 用新的过滤状态替换旧状态，然后重新渲染整个视图。
//!
//! ## 输入命令
//! - `search <text>` 或 `/<text>`: 设置搜索词（`search` 单独出现时清空）
//! - `type <selector>` / `status <selector>`: 设置选择器
//! - `reset`: 恢复初始过滤状态
//! - `view|export|delete <id>`, `export-all`, `backup`, `report`: 操作（未接入后端）
//! - `help`, `quit`（或 `q`、EOF）
//!
//! ## 依赖关系
//! - 使用 `cli/browse.rs` 定义的参数
//! - 使用 `view/` 渲染，`console` 控制终端

use super::counters_for;
use crate::cli::browse::BrowseArgs;
use crate::error::{ExoError, Result};
use crate::models::{AnalysisType, Status};
use crate::store::RecordStore;
use crate::utils::output;
use crate::view::actions::{self, BulkAction, RowAction};
use crate::view::{render, FilterState, Selector, SummaryCounters};

use colored::Colorize;
use console::Term;
use std::io::{self, BufRead, Write};
use tracing::debug;

const HELP: &[(&str, &str)] = &[
    ("search <text>, /<text>", "search name or classification (empty clears)"),
    ("type <selector>", "all | Classification | Light Curve | System Study | Atmospheric"),
    ("status <selector>", "all | Confirmed | Under Review | Published"),
    ("reset", "clear all filters"),
    ("view|export|delete <id>", "row actions"),
    ("export-all | backup | report", "bulk actions"),
    ("help", "show this help"),
    ("quit, q", "leave the browser"),
];

/// 一行交互输入
#[derive(Debug, Clone, PartialEq)]
pub enum BrowseInput {
    Search(String),
    Type(Selector<AnalysisType>),
    Status(Selector<Status>),
    Reset,
    Row(RowAction, String),
    Bulk(BulkAction),
    Help,
    Quit,
}

/// 解析一行输入；空行返回 `None`
pub fn parse_input(line: &str) -> std::result::Result<Option<BrowseInput>, String> {
    let line = line.trim_end_matches(|c| c == '\r' || c == '\n');
    if line.trim().is_empty() {
        return Ok(None);
    }

    // 搜索文本原样保留，只去掉命令后的一个分隔符
    let command = line.trim_start();
    if let Some(text) = command.strip_prefix('/') {
        return Ok(Some(BrowseInput::Search(text.to_string())));
    }

    let (word, raw_rest) = match command.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r),
        None => (command, ""),
    };
    let rest = raw_rest.trim();

    let input = match word {
        "search" => BrowseInput::Search(raw_rest.to_string()),
        "type" if rest.is_empty() => return Err("usage: type <selector>".to_string()),
        "type" => BrowseInput::Type(Selector::parse(rest).map_err(|e| e.to_string())?),
        "status" if rest.is_empty() => return Err("usage: status <selector>".to_string()),
        "status" => BrowseInput::Status(Selector::parse(rest).map_err(|e| e.to_string())?),
        "reset" => BrowseInput::Reset,
        "help" | "?" => BrowseInput::Help,
        "quit" | "q" | "exit" => BrowseInput::Quit,
        _ => {
            if let Some(action) = RowAction::from_keyword(word) {
                if rest.is_empty() {
                    return Err(format!("usage: {} <id>", word));
                }
                BrowseInput::Row(action, rest.to_string())
            } else if let Some(action) = BulkAction::from_keyword(word) {
                BrowseInput::Bulk(action)
            } else {
                return Err(format!(
                    "Unknown command '{}'. Type 'help' for commands.",
                    word
                ));
            }
        }
    };

    Ok(Some(input))
}

/// 由当前状态和输入得到下一个过滤状态
pub fn next_state(state: FilterState, input: &BrowseInput) -> FilterState {
    match input {
        BrowseInput::Search(text) => state.with_search(text.clone()),
        BrowseInput::Type(sel) => state.with_type(sel.clone()),
        BrowseInput::Status(sel) => state.with_status(sel.clone()),
        BrowseInput::Reset => FilterState::default(),
        _ => state,
    }
}

/// 交互会话
pub struct Session<'a> {
    store: &'a RecordStore,
    counters: SummaryCounters,
    state: FilterState,
    clear_screen: bool,
}

impl<'a> Session<'a> {
    pub fn new(store: &'a RecordStore, counters: SummaryCounters, state: FilterState) -> Self {
        Session {
            store,
            counters,
            state,
            clear_screen: false,
        }
    }

    /// 每次渲染前清屏
    pub fn clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// 运行会话直到 quit 或 EOF，返回最终过滤状态
    pub fn run<R: BufRead, W: Write>(mut self, mut input: R, out: &mut W) -> Result<FilterState> {
        let mut notices: Vec<String> = Vec::new();

        loop {
            self.render(out, &notices)?;
            notices.clear();

            write!(out, "{} ", ">".cyan().bold()).map_err(terminal_error)?;
            out.flush().map_err(terminal_error)?;

            let mut line = String::new();
            if input.read_line(&mut line).map_err(terminal_error)? == 0 {
                writeln!(out).map_err(terminal_error)?;
                break;
            }

            let parsed = match parse_input(&line) {
                Ok(Some(parsed)) => parsed,
                Ok(None) => continue,
                Err(msg) => {
                    notices.push(output::warning_line(&msg));
                    continue;
                }
            };
            debug!(?parsed, "browse input");

            match &parsed {
                BrowseInput::Quit => break,
                BrowseInput::Help => notices.extend(help_lines()),
                BrowseInput::Row(action, id) => {
                    if self.store.get(id).is_some() {
                        let name = format!("{} {}", action.keyword(), id);
                        notices.push(output::info_line(&actions::unavailable_notice(&name)));
                    } else {
                        notices.push(output::warning_line(&format!("No result with id '{}'", id)));
                    }
                }
                BrowseInput::Bulk(action) => {
                    notices.push(output::info_line(&actions::unavailable_notice(action.label())));
                }
                _ => {}
            }

            self.state = next_state(self.state, &parsed);
        }

        Ok(self.state)
    }

    fn render<W: Write>(&self, out: &mut W, notices: &[String]) -> Result<()> {
        if self.clear_screen {
            Term::stdout().clear_screen().map_err(terminal_error)?;
        }

        let view = render::render_view(self.store.records(), &self.state, &self.counters);
        write!(out, "{}", view).map_err(terminal_error)?;
        for notice in notices {
            writeln!(out, "{}", notice).map_err(terminal_error)?;
        }
        Ok(())
    }
}

/// 执行 browse 命令
pub fn execute(args: BrowseArgs, store: &RecordStore) -> Result<()> {
    let state = FilterState::new(args.search, args.analysis_type, args.status);
    let counters = counters_for(args.counter.counters, store);
    let clear = !args.no_clear && Term::stdout().is_term();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let last = Session::new(store, counters, state)
        .clear_screen(clear)
        .run(stdin.lock(), &mut stdout)?;

    debug!(?last, "browse finished");
    Ok(())
}

fn help_lines() -> Vec<String> {
    HELP.iter()
        .map(|(cmd, desc)| format!("  {:<30} {}", cmd, desc))
        .collect()
}

fn terminal_error(source: io::Error) -> ExoError {
    ExoError::TerminalError { source }
}
