pub(crate) use alloc::collections::BTreeSet;
pub(crate) use alloc::vec::Vec;
pub(crate) use core::cell::RefCell;
pub(crate) use core::cmp::max;
pub(crate) use core::fmt;
pub(crate) use core::mem::needs_drop;
pub(crate) use core::ptr;
pub(crate) use crate::AllocError;
pub(crate) use crate::arena::Arena;
pub(crate) use crate::list::Node;
