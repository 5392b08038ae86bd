#![allow(dead_code, reason = "each test binary uses a different part of the harness")]

use std::cell::Cell;

use anyhow::{Context as _, Result};
use css_box::{
    AvailableSize, AvailableSpace, BoxCapabilities, BoxId, FormattingContext, FormattingContextFactory,
    LayoutContext, LayoutMode, LayoutState, LayoutTree, SizeConstraint, UsedValues,
};
use css_flexbox::{FlexFormattingContext, FlexLayoutConfig, establishes_flex_formatting_context};
use css_orchestrator::style_model::{ComputedStyle, Size};
use log::trace;

pub const ROOT: BoxId = BoxId(0);

/// Height of one line of words.
pub const LINE_HEIGHT: f32 = 10.0;

pub fn init_logging() {
    if env_logger::builder().is_test(true).try_init().is_err() {
        trace!("test logger already installed");
    }
}

pub fn approx(actual: f32, expected: f32) -> bool {
    (actual - expected).abs() < 0.01
}

/// A style with the given content-box width and height.
pub fn sized(width: f32, height: f32) -> ComputedStyle {
    ComputedStyle {
        width: Size::Length(width),
        height: Size::Length(height),
        ..ComputedStyle::default()
    }
}

/// What a leaf box contains.
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    Empty,
    /// Unbreakable words of the given widths, wrapped greedily without spaces.
    Words(Vec<f32>),
    /// Replaced content with a natural size.
    Replaced { width: f32, height: f32 },
}

impl Content {
    fn intrinsic_widths(&self) -> (f32, f32) {
        match self {
            Self::Empty => (0.0, 0.0),
            Self::Words(words) => (
                words.iter().copied().fold(0.0, f32::max),
                words.iter().sum(),
            ),
            Self::Replaced { width, .. } => (*width, *width),
        }
    }

    fn height_at(&self, available_width: f32) -> f32 {
        match self {
            Self::Empty => 0.0,
            Self::Words(words) => {
                let mut lines = 0u16;
                let mut line_width = 0.0;
                for &word in words {
                    if lines == 0 || line_width + word > available_width + 0.01 {
                        lines += 1;
                        line_width = word;
                    } else {
                        line_width += word;
                    }
                }
                f32::from(lines) * LINE_HEIGHT
            }
            Self::Replaced { width, height } if *width > 0.0 && available_width > 0.0 => {
                available_width * height / width
            }
            Self::Replaced { height, .. } => *height,
        }
    }
}

struct Node {
    style: ComputedStyle,
    parent: Option<BoxId>,
    children: Vec<BoxId>,
    content: Content,
}

/// Box tree whose flex containers get a flex formatting context and whose
/// other boxes get a leaf context sized by their content.
pub struct TestTree {
    nodes: Vec<Node>,
    pub config: FlexLayoutConfig,
    pub replaced_preparations: Cell<usize>,
}

impl TestTree {
    pub fn new(root_style: ComputedStyle) -> Self {
        Self {
            nodes: vec![Node {
                style: root_style,
                parent: None,
                children: Vec::new(),
                content: Content::Empty,
            }],
            config: FlexLayoutConfig::default(),
            replaced_preparations: Cell::new(0),
        }
    }

    pub fn push(&mut self, parent: BoxId, style: ComputedStyle, content: Content) -> BoxId {
        let id = BoxId(self.nodes.len() as u64);
        self.nodes.push(Node {
            style,
            parent: Some(parent),
            children: Vec::new(),
            content,
        });
        self.nodes[parent.0 as usize].children.push(id);
        id
    }

    fn node(&self, id: BoxId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    /// Lay out the tree in a viewport `viewport_width` wide with an indefinite height.
    ///
    /// An `auto` root width fills the viewport.
    pub fn layout(&self, viewport_width: f32) -> Result<LayoutState<'static>> {
        let ctx = LayoutContext::new(self, self);
        let mut state = LayoutState::new();
        let mut viewport = UsedValues::default();
        viewport.set_content_width(viewport_width);

        let root = state.get_mutable(ROOT);
        root.initialize_from_style(&self.node(ROOT).style, &viewport);
        if !root.has_definite_width() {
            let edges = root.margin_box_left() + root.margin_box_right();
            root.set_content_width(viewport_width - edges);
        }
        let available = root.available_inner_space_or_constraints_from(AvailableSpace::new(
            AvailableSize::Definite(viewport_width),
            AvailableSize::Indefinite,
        ));

        let mut context = self
            .create_independent_formatting_context_if_needed(ROOT)
            .context("the root establishes no formatting context")?;
        context.run(&ctx, &mut state, LayoutMode::Normal, available)?;
        Ok(state)
    }
}

impl LayoutTree for TestTree {
    fn style(&self, id: BoxId) -> &ComputedStyle {
        &self.node(id).style
    }

    fn children(&self, id: BoxId) -> &[BoxId] {
        &self.node(id).children
    }

    fn containing_block(&self, id: BoxId) -> Option<BoxId> {
        self.node(id).parent
    }

    fn capabilities(&self, id: BoxId) -> BoxCapabilities {
        match self.node(id).content {
            Content::Replaced { width, height } => BoxCapabilities {
                is_replaced: true,
                natural_width: Some(width),
                natural_height: Some(height),
                intrinsic_aspect_ratio: Some(width / height),
                is_collapsible_whitespace: false,
            },
            Content::Empty | Content::Words(_) => BoxCapabilities::default(),
        }
    }

    fn prepare_for_replaced_layout(&self, _id: BoxId) {
        self.replaced_preparations.set(self.replaced_preparations.get() + 1);
    }
}

impl FormattingContextFactory for TestTree {
    fn create_independent_formatting_context_if_needed(&self, id: BoxId) -> Option<Box<dyn FormattingContext>> {
        let node = self.node(id);
        if establishes_flex_formatting_context(node.style.display) {
            return Some(Box::new(FlexFormattingContext::with_config(id, self.config)));
        }
        Some(Box::new(LeafContext {
            id,
            content: node.content.clone(),
            width: 0.0,
            height: 0.0,
        }))
    }
}

/// Formatting context of a box without children: its content alone decides its size.
struct LeafContext {
    id: BoxId,
    content: Content,
    width: f32,
    height: f32,
}

impl FormattingContext for LeafContext {
    fn run(
        &mut self,
        _ctx: &LayoutContext<'_>,
        state: &mut LayoutState<'_>,
        mode: LayoutMode,
        available: AvailableSpace,
    ) -> Result<()> {
        let used = state.get(self.id);
        let (min_content, max_content) = self.content.intrinsic_widths();
        self.width = if used.has_definite_width() {
            used.content_width()
        } else {
            match used.width_constraint {
                SizeConstraint::MinContent => min_content,
                SizeConstraint::MaxContent => max_content,
                SizeConstraint::None => match available.width {
                    AvailableSize::Definite(width) => width,
                    AvailableSize::MinContent => min_content,
                    AvailableSize::MaxContent | AvailableSize::Indefinite => max_content,
                },
            }
        };
        self.height = self.content.height_at(self.width);
        if mode == LayoutMode::Normal {
            let used = state.get_mutable(self.id);
            if !used.has_definite_width() {
                used.set_content_width(self.width);
            }
            if !used.has_definite_height() {
                used.set_content_height(self.height);
            }
        }
        Ok(())
    }

    fn automatic_content_width(&self, _state: &LayoutState<'_>) -> f32 {
        self.width
    }

    fn automatic_content_height(&self, _state: &LayoutState<'_>) -> f32 {
        self.height
    }
}
