//! Composition runtime: memoized state and node emission.
//!
//! A [`Composition`] runs a content closure and records every node emitted by
//! components into a [`RenderTree`]. State created with [`remember`] lives in
//! the composition and survives across render passes for as long as the same
//! call site keeps running; slots that a pass does not visit are dropped.
//!
//! ```
//! use chip_catalog_ui::{Composition, remember};
//!
//! let mut composition = Composition::new();
//! let mut seen = Vec::new();
//! for _ in 0..2 {
//!     composition.render(|| {
//!         let count = remember(|| 0usize);
//!         count.with_mut(|c| *c += 1);
//!         seen.push(count.get());
//!     });
//! }
//! assert_eq!(seen, vec![1, 2]);
//! ```

use std::{
    any::{Any, TypeId},
    cell::RefCell,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use indextree::{Arena, NodeId};
use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHasher};
use smallvec::SmallVec;
use tracing::trace;

use crate::{NodeSpec, RenderNode, RenderTree, StackLayout};

const ROOT_KEY: u64 = 0x5eed_c41b;

/// Handle to memoized state created by [`remember`] and
/// [`remember_with_key`], or owned directly by a host through
/// [`State::new`].
///
/// `State<T>` is cheap to clone; clones share the same value.
pub struct State<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> State<T> {
    /// Creates state owned by the caller rather than by a composition.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Execute a closure with a shared reference to the stored value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.read())
    }

    /// Execute a closure with a mutable reference to the stored value.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Get a cloned value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(Clone::clone)
    }

    /// Replace the stored value.
    pub fn set(&self, value: T) {
        self.with_mut(|slot| *slot = value);
    }

    /// Returns `true` if both handles point at the same value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl State<bool> {
    /// Flips the flag and returns the new value.
    pub fn toggle(&self) -> bool {
        self.with_mut(|value| {
            *value = !*value;
            *value
        })
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("State").field(&*self.inner.read()).finish()
    }
}

struct Slot {
    type_id: TypeId,
    value: Arc<dyn Any + Send + Sync>,
    visited: u64,
}

struct GroupFrame {
    key: u64,
    // Ordinal per component name, so a conditional sibling of another kind
    // does not re-key the nodes after it.
    children: SmallVec<[(&'static str, u32); 4]>,
    remembers: u32,
}

impl GroupFrame {
    fn new(key: u64) -> Self {
        Self {
            key,
            children: SmallVec::new(),
            remembers: 0,
        }
    }
}

struct Composer {
    arena: Arena<RenderNode>,
    node_stack: Vec<NodeId>,
    group_stack: Vec<GroupFrame>,
    slots: FxHashMap<u64, Slot>,
    pass: u64,
}

impl Composer {
    fn next_child_key(&mut self, name: &'static str) -> u64 {
        let frame = self.frame();
        let ordinal = match frame.children.iter_mut().find(|(n, _)| *n == name) {
            Some((_, count)) => {
                *count += 1;
                *count
            }
            None => {
                frame.children.push((name, 1));
                1
            }
        };
        hash_components(&(frame.key, "node", name, ordinal))
    }

    fn frame(&mut self) -> &mut GroupFrame {
        self.group_stack
            .last_mut()
            .unwrap_or_else(|| panic!("composition group stack is empty"))
    }

    fn begin_node(&mut self, node: RenderNode) -> NodeId {
        let parent = *self
            .node_stack
            .last()
            .unwrap_or_else(|| panic!("composition node stack is empty"));
        let key = self.next_child_key(node.name);
        let id = self.arena.new_node(node);
        parent.append(id, &mut self.arena);

        self.group_stack.push(GroupFrame::new(key));
        self.node_stack.push(id);
        id
    }

    fn end_node(&mut self, id: NodeId) {
        let popped = self.node_stack.pop();
        debug_assert_eq!(popped, Some(id), "emit calls must nest");
        self.group_stack.pop();
    }

    fn lookup(&mut self, key: u64, type_id: TypeId) -> Option<Arc<dyn Any + Send + Sync>> {
        let pass = self.pass;
        let slot = self.slots.get_mut(&key)?;
        if slot.type_id != type_id {
            panic!(
                "remembered state type changed at the same call site (slot {key:#x}); \
                 use remember_with_key or key() to separate them"
            );
        }
        slot.visited = pass;
        Some(Arc::clone(&slot.value))
    }
}

thread_local! {
    static COMPOSER: RefCell<Option<Composer>> = const { RefCell::new(None) };
}

fn with_composer<R>(f: impl FnOnce(&mut Composer) -> R) -> R {
    COMPOSER.with(|cell| {
        let mut composer = cell.borrow_mut();
        let composer = composer.as_mut().unwrap_or_else(|| {
            panic!("components and remember() must be called inside Composition::render")
        });
        f(composer)
    })
}

fn hash_components<H: Hash>(value: &H) -> u64 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

struct InstallGuard;

impl Drop for InstallGuard {
    fn drop(&mut self) {
        COMPOSER.with(|cell| cell.borrow_mut().take());
    }
}

/// Owns the remembered state of one hosted view and renders it into
/// [`RenderTree`]s.
#[derive(Default)]
pub struct Composition {
    slots: FxHashMap<u64, Slot>,
    passes: u64,
}

impl Composition {
    /// Creates an empty composition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `content` and returns the render tree it emitted.
    ///
    /// # Panics
    ///
    /// Panics if called while another composition is rendering on the same
    /// thread.
    pub fn render<F>(&mut self, content: F) -> RenderTree
    where
        F: FnOnce(),
    {
        self.passes += 1;
        let pass = self.passes;

        let mut arena = Arena::new();
        let root = arena.new_node(NodeSpec::new("root", StackLayout).node);
        let composer = Composer {
            arena,
            node_stack: vec![root],
            group_stack: vec![GroupFrame::new(ROOT_KEY)],
            slots: std::mem::take(&mut self.slots),
            pass,
        };

        COMPOSER.with(|cell| {
            let mut installed = cell.borrow_mut();
            assert!(
                installed.is_none(),
                "Composition::render cannot be nested on one thread"
            );
            *installed = Some(composer);
        });
        let guard = InstallGuard;
        content();
        let composer = COMPOSER
            .with(|cell| cell.borrow_mut().take())
            .unwrap_or_else(|| panic!("composer was removed while rendering"));
        drop(guard);

        let Composer {
            arena, mut slots, ..
        } = composer;
        let before = slots.len();
        slots.retain(|_, slot| slot.visited == pass);
        trace!(
            pass,
            slots = slots.len(),
            dropped = before - slots.len(),
            "composition rendered"
        );
        self.slots = slots;
        RenderTree::new(arena, root)
    }

    /// Number of remembered slots kept after the last pass.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of render passes run so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }
}

/// Emits a node, running `content` to emit its children.
pub fn emit<F>(spec: NodeSpec, content: F) -> NodeId
where
    F: FnOnce(),
{
    let id = with_composer(|composer| composer.begin_node(spec.node));
    content();
    with_composer(|composer| composer.end_node(id));
    id
}

/// Remember a value across render passes at this call site.
///
/// Identity follows the position of the call inside the current node and
/// group. A node is identified by its component name and its ordinal among
/// siblings of the same name. Inside loops, prefer [`remember_with_key`] or
/// [`key`].
///
/// # Panics
///
/// Panics outside [`Composition::render`], or if the same position later
/// remembers a value of a different type.
pub fn remember<F, T>(init: F) -> State<T>
where
    F: FnOnce() -> T,
    T: Send + Sync + 'static,
{
    let slot_key = with_composer(|composer| {
        let frame = composer.frame();
        frame.remembers += 1;
        hash_components(&(frame.key, "slot", frame.remembers))
    });
    remember_slot(slot_key, init)
}

/// Remember a value identified by `key` within the current node.
///
/// Two calls with the same key in the same node share one value.
pub fn remember_with_key<K, F, T>(key: K, init: F) -> State<T>
where
    K: Hash,
    F: FnOnce() -> T,
    T: Send + Sync + 'static,
{
    let key_hash = hash_components(&key);
    let slot_key = with_composer(|composer| {
        let frame = composer.frame();
        hash_components(&(frame.key, "keyed", key_hash))
    });
    remember_slot(slot_key, init)
}

fn remember_slot<F, T>(slot_key: u64, init: F) -> State<T>
where
    F: FnOnce() -> T,
    T: Send + Sync + 'static,
{
    let type_id = TypeId::of::<RwLock<T>>();
    if let Some(value) = with_composer(|composer| composer.lookup(slot_key, type_id)) {
        let inner = value
            .downcast::<RwLock<T>>()
            .unwrap_or_else(|_| panic!("remembered slot {slot_key:#x} downcast failed"));
        return State { inner };
    }

    let state = State::new(init());
    let value: Arc<dyn Any + Send + Sync> = state.inner.clone();
    with_composer(|composer| {
        let visited = composer.pass;
        composer.slots.insert(
            slot_key,
            Slot {
                type_id,
                value,
                visited,
            },
        );
    });
    state
}

/// Groups the execution of `block` under a stable key.
///
/// `remember` calls and nodes inside the block are identified relative to
/// the key instead of their position, so reordered list items keep their
/// state.
pub fn key<K, F, R>(key: K, block: F) -> R
where
    K: Hash,
    F: FnOnce() -> R,
{
    let key_hash = hash_components(&key);
    with_composer(|composer| {
        let parent = composer.frame().key;
        composer
            .group_stack
            .push(GroupFrame::new(hash_components(&(parent, "group", key_hash))));
    });
    let result = block();
    with_composer(|composer| {
        composer.group_stack.pop();
    });
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(content: impl FnOnce()) {
        emit(NodeSpec::new("group", StackLayout), content);
    }

    #[test]
    fn test_remember_survives_passes() {
        let mut composition = Composition::new();
        let mut handles = Vec::new();
        for _ in 0..3 {
            composition.render(|| {
                let flag = remember(|| false);
                handles.push(flag);
            });
        }
        handles[0].set(true);
        assert!(handles[2].get());
        assert!(handles[0].ptr_eq(&handles[1]));
        assert_eq!(composition.slot_count(), 1);
    }

    #[test]
    fn test_unvisited_slots_are_dropped() {
        let mut composition = Composition::new();
        composition.render(|| {
            remember(|| 1u8);
            group(|| {
                remember(|| 2u8);
            });
        });
        assert_eq!(composition.slot_count(), 2);

        composition.render(|| {
            remember(|| 1u8);
        });
        assert_eq!(composition.slot_count(), 1);
    }

    #[test]
    fn test_sibling_nodes_have_separate_state() {
        let mut composition = Composition::new();
        let mut first = None;
        let mut second = None;
        composition.render(|| {
            group(|| first = Some(remember(|| 0)));
            group(|| second = Some(remember(|| 0)));
        });
        let (first, second) = (first.unwrap(), second.unwrap());
        assert!(!first.ptr_eq(&second));
    }

    #[test]
    fn test_conditional_sibling_keeps_later_state() {
        let mut composition = Composition::new();
        let show_banner = State::new(false);
        let mut render = |show: bool| {
            let mut counter = None;
            composition.render(|| {
                if show {
                    emit(NodeSpec::new("banner", StackLayout), || {});
                }
                emit(NodeSpec::new("counter", StackLayout), || {
                    counter = Some(remember(|| 0u32));
                });
            });
            counter.unwrap()
        };

        render(show_banner.get()).set(42);
        show_banner.toggle();
        assert_eq!(render(show_banner.get()).get(), 42);
        show_banner.toggle();
        assert_eq!(render(show_banner.get()).get(), 42);
    }

    #[test]
    fn test_keyed_state_follows_key() {
        let mut composition = Composition::new();
        let mut render = |order: &[&str]| {
            let mut states = Vec::new();
            composition.render(|| {
                for name in order {
                    key(*name, || states.push((name.to_string(), remember(|| name.len()))));
                }
            });
            states
        };

        let first = render(&["a", "bb"]);
        first[0].1.set(100);
        let second = render(&["bb", "a"]);
        assert_eq!(second[1].0, "a");
        assert_eq!(second[1].1.get(), 100);
    }

    #[test]
    fn test_toggle_is_self_inverse() {
        let flag = State::new(false);
        assert!(flag.toggle());
        assert!(!flag.toggle());
        assert!(!flag.get());
    }

    #[test]
    fn test_tree_records_nesting() {
        let mut composition = Composition::new();
        let tree = composition.render(|| {
            group(|| {
                group(|| {});
            });
        });
        let root = tree.root();
        let outer: Vec<_> = tree.children(root).collect();
        assert_eq!(outer.len(), 1);
        assert_eq!(tree.children(outer[0]).count(), 1);
    }

    #[test]
    #[should_panic(expected = "inside Composition::render")]
    fn test_remember_outside_composition_panics() {
        remember(|| 0u32);
    }
}
