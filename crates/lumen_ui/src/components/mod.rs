//! Themed components
//!
//! Each component is a builder: configure it with chained setters, then build
//! it against a [`BuildContext`](crate::BuildContext) that carries the theme.

pub(crate) mod shared;

pub mod alert;
pub mod avatar;
pub mod badge;
pub mod breadcrumbs;
pub mod button;
pub mod card;
pub mod checkbox;
pub mod chip;
pub mod form_control;
pub mod image;
pub mod input;
pub mod layout;
pub mod list;
pub mod pagination;
pub mod progress;
pub mod radio;
pub mod select;
pub mod switch;
pub mod tabs;
pub mod theme_toggle;
pub mod tooltip;
pub mod typography;

pub use shared::{ColorProp, ComponentSize, FieldVariant, Spacing};

pub use alert::{alert, Alert, AlertVariant, Severity};
pub use avatar::{avatar, initials, Avatar, AvatarVariant};
pub use badge::{badge, Badge, BadgeAnchor, BadgeContent, BadgeVariant};
pub use breadcrumbs::{breadcrumb_entries, breadcrumbs, BreadcrumbEntry, Breadcrumbs};
pub use button::{button, icon_button, Button, ButtonVariant, IconButton};
pub use card::{
    card, card_actions, card_content, card_header, Card, CardActions, CardContent, CardHeader,
    CardVariant,
};
pub use checkbox::{checkbox, CheckState, Checkbox};
pub use chip::{chip, Chip, ChipVariant};
pub use form_control::{form_control, FieldContext, FormControl};
pub use image::{image, Image, ImageLoad, ImageStatus, ObjectFit};
pub use input::{input, textarea, Input, Resize, Textarea};
pub use layout::{
    block, container, divider, flex, grid, hstack, stack, Align, Block, Container, Divider, Flex,
    FlexDirection, Grid, Orientation, Stack,
};
pub use list::{list, list_item, List, ListItem};
pub use pagination::{
    pagination, pagination_items, Pagination, PaginationConfig, PaginationItem, PaginationShape,
    PaginationVariant,
};
pub use progress::{progress, skeleton, spinner, Progress, Skeleton, SkeletonVariant, Spinner};
pub use radio::{radio, radio_group, Radio, RadioGroup, RadioOption};
pub use select::{select, Select, SelectOption};
pub use switch::{switch, Switch};
pub use tabs::{tab, tabs, Tab, Tabs};
pub use theme_toggle::{theme_toggle, ThemeToggle};
pub use tooltip::{tooltip, Placement, Tooltip};
pub use typography::{link, text_variant, typography, Link, TextAlign, Typography, Underline};
