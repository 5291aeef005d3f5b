//! Zenith: compound widgets sharing selection state.
//!
//! A compound root (an [`Accordion`](widgets::accordion::Accordion),
//! [`Tabs`](widgets::tabs::Tabs) or [`Sidebar`](widgets::sidebar::Sidebar))
//! owns a store and binds it into a [`Scope`](scope::Scope). Leaves receive a
//! [`ScopeHandle`](scope::ScopeHandle), read membership to decide what to
//! render, and register handlers that change it.

pub mod error;
pub mod expansion;
pub mod handlers;
pub mod pairing;
pub mod scope;
pub mod selection;
pub mod state;
pub mod widgets;

pub use error::ConfigError;

pub mod prelude {
    pub use crate::error::{ConfigError, PairingWarning, Part};
    pub use crate::expansion::Expansion;
    pub use crate::handlers::{Handler, HandlerRegistry, ON_ACTIVATE, ON_REMOVE};
    pub use crate::pairing::check_pairs;
    pub use crate::scope::{Family, Scope, ScopeHandle, ScopeId, SubscriptionId};
    pub use crate::selection::{Selection, SelectionMode};
    pub use crate::state::State;
    pub use crate::widgets::accordion::{
        Accordion, AccordionConfig, AccordionContent, AccordionHandle, AccordionItem,
        AccordionTrigger,
    };
    pub use crate::widgets::data;
    pub use crate::widgets::sidebar::{
        Badge, Position, Sidebar, SidebarConfig, SidebarContent, SidebarFooter, SidebarGroup,
        SidebarHandle, SidebarHeader, SidebarItem,
    };
    pub use crate::widgets::tabs::{
        Orientation, Tab, TabList, TabPanel, TabPanels, TabSize, TabVariant, Tabs, TabsConfig,
        TabsHandle,
    };
    pub use crate::widgets::tag::{Spacing, Tag, TagGroup, TagSize, TagVariant};
}
