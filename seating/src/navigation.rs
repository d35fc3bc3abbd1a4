//! Block -> hall -> seat drill-down for the student portal.
//!
//! Each level is loaded in two steps so a UI can release its state between
//! them: `begin_*` records the selection and returns a [`Load`] carrying a
//! ticket, `finish_*` applies the response only if that ticket is still
//! current. A response that arrives after the user moved on is dropped.

use shared_http::api::{Block, Hall, HallSeatsResponse, StudentRef};
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult};
use crate::grid::SeatGrid;
use crate::layout::GridLayout;
use crate::ports::SeatingBackend;
use crate::search::FocusTarget;
use crate::ticket::{Sequencer, Ticket};

/// The next fetch a caller has to make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Load {
    Halls { block: String, ticket: Ticket },
    Seats { hall: String, ticket: Ticket },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockCard {
    pub key: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub hall_count: usize,
    pub filled: u32,
    pub total: u32,
    pub percentage: u32,
    pub active: bool,
}

impl BlockCard {
    fn from_block(block: &Block, active: bool) -> Self {
        let filled = block.filled.unwrap_or(0);
        let total = block.total.unwrap_or(0);
        Self {
            key: block.key.clone(),
            name: block.name.clone(),
            icon: block.icon.clone(),
            color: block.color.clone(),
            hall_count: block.halls.len(),
            filled,
            total,
            percentage: percentage(filled, total),
            active,
        }
    }
}

pub fn percentage(filled: u32, total: u32) -> u32 {
    if total == 0 {
        0
    } else {
        (f64::from(filled) / f64::from(total) * 100.0).round() as u32
    }
}

#[derive(Debug, Default)]
pub struct Navigator {
    blocks: Vec<Block>,
    halls: Vec<Hall>,
    seats: Vec<Option<StudentRef>>,
    layout: GridLayout,
    selected_block: Option<String>,
    selected_hall: Option<String>,
    highlighted: Option<usize>,
    pending_focus: Option<FocusTarget>,
    sequencer: Sequencer,
    blocks_ticket: Option<Ticket>,
    halls_ticket: Option<Ticket>,
    seats_ticket: Option<Ticket>,
    last_error: Option<ApiError>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn halls(&self) -> &[Hall] {
        &self.halls
    }

    pub fn seats(&self) -> &[Option<StudentRef>] {
        &self.seats
    }

    pub fn selected_block(&self) -> Option<&str> {
        self.selected_block.as_deref()
    }

    pub fn selected_hall(&self) -> Option<&str> {
        self.selected_hall.as_deref()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Set when the latest fetch failed; cleared by the next success.
    pub fn last_error(&self) -> Option<&ApiError> {
        self.last_error.as_ref()
    }

    pub fn grid(&self) -> SeatGrid {
        SeatGrid::build(&self.seats, self.highlighted, self.layout)
    }

    pub fn block_cards(&self) -> Vec<BlockCard> {
        self.blocks
            .iter()
            .map(|b| BlockCard::from_block(b, self.selected_block.as_deref() == Some(&b.key)))
            .collect()
    }

    /// Matches on key first, then on display name.
    pub fn resolve_block(&self, key: Option<&str>, name: Option<&str>) -> Option<&Block> {
        resolve_block(&self.blocks, key, name)
    }

    pub fn highlight(&mut self, index: Option<usize>) {
        self.highlighted = index;
    }

    // === Blocks ===

    pub fn begin_load_blocks(&mut self) -> Ticket {
        let ticket = self.sequencer.issue();
        self.blocks_ticket = Some(ticket);
        ticket
    }

    pub fn finish_load_blocks(&mut self, ticket: Ticket, result: ApiResult<Vec<Block>>) -> bool {
        if self.blocks_ticket != Some(ticket) {
            debug!("dropping stale block list");
            return false;
        }
        self.blocks_ticket = None;
        match result {
            Ok(blocks) => {
                self.blocks = blocks;
                self.last_error = None;
            }
            Err(e) => {
                warn!("failed to load blocks: {}", e);
                self.blocks.clear();
                self.last_error = Some(e);
            }
        }
        true
    }

    // === Halls ===

    pub fn begin_select_block(&mut self, key: &str) -> Load {
        self.pending_focus = None;
        self.start_block(key)
    }

    fn start_block(&mut self, key: &str) -> Load {
        let ticket = self.sequencer.issue();
        self.selected_block = Some(key.to_string());
        self.selected_hall = None;
        self.halls.clear();
        self.clear_seats();
        self.halls_ticket = Some(ticket);
        self.seats_ticket = None;
        Load::Halls {
            block: key.to_string(),
            ticket,
        }
    }

    /// Applies a hall list and, if there is one, starts loading the hall to show:
    /// the focused student's hall, else the first hall returned.
    pub fn finish_select_block(&mut self, ticket: Ticket, result: ApiResult<Vec<Hall>>) -> Option<Load> {
        if self.halls_ticket != Some(ticket) {
            debug!("dropping stale hall list");
            return None;
        }
        self.halls_ticket = None;
        match result {
            Ok(halls) => {
                self.halls = halls;
                self.last_error = None;
            }
            Err(e) => {
                warn!("failed to load halls: {}", e);
                self.halls.clear();
                self.last_error = Some(e);
                return None;
            }
        }

        let next = self
            .pending_focus
            .as_ref()
            .map(|f| f.hall.clone())
            .or_else(|| self.halls.first().map(|h| h.name.clone()))?;
        Some(self.start_hall(&next))
    }

    // === Seats ===

    pub fn begin_select_hall(&mut self, name: &str) -> Load {
        self.pending_focus = None;
        self.start_hall(name)
    }

    fn start_hall(&mut self, name: &str) -> Load {
        let ticket = self.sequencer.issue();
        self.selected_hall = Some(name.to_string());
        self.clear_seats();
        self.seats_ticket = Some(ticket);
        Load::Seats {
            hall: name.to_string(),
            ticket,
        }
    }

    pub fn finish_select_hall(&mut self, ticket: Ticket, result: ApiResult<HallSeatsResponse>) -> bool {
        if self.seats_ticket != Some(ticket) {
            debug!("dropping stale seat list");
            return false;
        }
        self.seats_ticket = None;
        match result {
            Ok(response) => {
                self.layout = GridLayout::for_capacity(response.hall.capacity as usize);
                self.seats = response.seats;
                self.last_error = None;
                if let Some(focus) = self.pending_focus.take() {
                    if self.selected_hall.as_deref() == Some(focus.hall.as_str()) {
                        self.highlighted = focus.seat_index;
                    }
                }
            }
            Err(e) => {
                warn!("failed to load seats: {}", e);
                self.clear_seats();
                self.last_error = Some(e);
            }
        }
        true
    }

    fn clear_seats(&mut self) {
        self.seats.clear();
        self.highlighted = None;
    }

    // === Search focus ===

    /// Moves the view to a located student's hall and highlights the seat once it loads.
    pub fn begin_focus(&mut self, target: FocusTarget) -> Load {
        let block = target.block_key.clone();
        self.pending_focus = Some(target.clone());
        match block {
            Some(block) => self.start_block(&block),
            None => {
                // Hall outside any known block.
                self.selected_block = None;
                self.halls.clear();
                self.halls_ticket = None;
                self.start_hall(&target.hall)
            }
        }
    }

    // === Async drivers ===

    /// Runs a load to completion, following the block -> hall hand-off.
    pub async fn drive<B>(&mut self, backend: &B, load: Load)
    where
        B: SeatingBackend + ?Sized,
    {
        let mut next = Some(load);
        while let Some(load) = next.take() {
            next = match load {
                Load::Halls { block, ticket } => {
                    let result = backend.list_halls(Some(&block)).await;
                    self.finish_select_block(ticket, result)
                }
                Load::Seats { hall, ticket } => {
                    let result = backend.hall_seats(&hall).await;
                    self.finish_select_hall(ticket, result);
                    None
                }
            };
        }
    }

    pub async fn load_blocks<B>(&mut self, backend: &B)
    where
        B: SeatingBackend + ?Sized,
    {
        let ticket = self.begin_load_blocks();
        let result = backend.list_blocks().await;
        self.finish_load_blocks(ticket, result);
    }

    pub async fn select_block<B>(&mut self, backend: &B, key: &str)
    where
        B: SeatingBackend + ?Sized,
    {
        let load = self.begin_select_block(key);
        self.drive(backend, load).await;
    }

    pub async fn select_hall<B>(&mut self, backend: &B, name: &str)
    where
        B: SeatingBackend + ?Sized,
    {
        let load = self.begin_select_hall(name);
        self.drive(backend, load).await;
    }

    pub async fn focus<B>(&mut self, backend: &B, target: FocusTarget)
    where
        B: SeatingBackend + ?Sized,
    {
        let load = self.begin_focus(target);
        self.drive(backend, load).await;
    }
}

pub fn resolve_block<'a>(blocks: &'a [Block], key: Option<&str>, name: Option<&str>) -> Option<&'a Block> {
    key.and_then(|key| blocks.iter().find(|b| b.key == key))
        .or_else(|| name.and_then(|name| blocks.iter().find(|b| b.name.eq_ignore_ascii_case(name))))
}
