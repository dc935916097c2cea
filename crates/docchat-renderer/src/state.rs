//! Block state carried across lines of one render call.

use crate::html;

/// A multi-line block that stays open across consecutive lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Block {
    List,
    Table,
}

/// Tracks which block, if any, is open.
///
/// Holding a single `Option<Block>` means a list and a table can never be
/// open at the same time.
#[derive(Debug, Default)]
pub(crate) struct RenderState {
    open: Option<Block>,
}

impl RenderState {
    /// Make `block` the open block, closing any other block first.
    ///
    /// Does nothing if `block` is already open.
    pub(crate) fn enter(&mut self, block: Block, out: &mut String) {
        if self.open == Some(block) {
            return;
        }
        self.close(out);
        match block {
            Block::List => html::list_start(out),
            Block::Table => html::table_start(out),
        }
        self.open = Some(block);
    }

    /// Close the open block, if any.
    pub(crate) fn close(&mut self, out: &mut String) {
        match self.open.take() {
            Some(Block::List) => html::list_end(out),
            Some(Block::Table) => html::table_end(out),
            None => {}
        }
    }
}
