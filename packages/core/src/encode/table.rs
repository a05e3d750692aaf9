//! Per-type member tables
//!
//! A member table is the resolved, definition-time view of a type's tagged
//! members: an ordered list of (name, accessor) entries with exactly one
//! entry per name. Tables are built through [`MemberTableBuilder`] — own
//! members first, inherited members appended through a projection — and
//! stored behind a `once_cell::sync::Lazy` static so resolution happens
//! once per type. Building a table never invokes an accessor.

use super::capability::{Capability, Emitted};

/// Ordered name/value pairs yielded by a collection accessor.
pub type CollectionEntries<'a> = Vec<(String, Emitted<'a>)>;

type ScalarAccessor<T> = Box<dyn for<'a> Fn(&'a T) -> Emitted<'a> + Send + Sync>;
type CollectionAccessor<T> = Box<dyn for<'a> Fn(&'a T) -> CollectionEntries<'a> + Send + Sync>;

pub(crate) enum Access<T: 'static> {
    Scalar(ScalarAccessor<T>),
    Collection(CollectionAccessor<T>),
}

/// One resolved member: a name plus the accessor producing its value.
pub struct MemberDescriptor<T: 'static> {
    name: &'static str,
    pub(crate) access: Access<T>,
}

impl<T: 'static> MemberDescriptor<T> {
    /// Member name as it appears in the encoded output.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The capability tag this member was registered with.
    #[inline]
    #[must_use]
    pub fn capability(&self) -> Capability {
        match self.access {
            Access::Scalar(_) => Capability::Scalar,
            Access::Collection(_) => Capability::Collection,
        }
    }
}

/// Override-resolved member table for one type.
pub struct MemberTable<T: 'static> {
    members: Vec<MemberDescriptor<T>>,
}

impl<T: 'static> MemberTable<T> {
    /// Start building a table. Register the type's own members before
    /// calling [`MemberTableBuilder::inherit`].
    #[must_use]
    pub fn builder() -> MemberTableBuilder<T> {
        MemberTableBuilder {
            members: Vec::new(),
        }
    }

    /// Resolved members in registration order, own before inherited.
    #[must_use]
    pub fn members(&self) -> &[MemberDescriptor<T>] {
        &self.members
    }
}

/// A type that publishes a member table for reflective encoding.
///
/// The table is resolved once and immutable thereafter; implementations
/// keep it behind a `Lazy` static:
///
/// ```text
/// impl Describe for Invoice {
///     fn table() -> &'static MemberTable<Self> {
///         static TABLE: Lazy<MemberTable<Invoice>> = Lazy::new(|| {
///             MemberTable::builder()
///                 .scalar("number", emit_number)
///                 .collection("extras", emit_extras)
///                 .build()
///         });
///         &TABLE
///     }
/// }
/// ```
pub trait Describe: Sized + 'static {
    /// The resolved member table for this type.
    fn table() -> &'static MemberTable<Self>;
}

/// Builder assembling a member table, most-derived members first.
pub struct MemberTableBuilder<T: 'static> {
    members: Vec<MemberDescriptor<T>>,
}

impl<T: 'static> MemberTableBuilder<T> {
    /// Register a scalar member. Re-registering a name replaces the
    /// earlier entry in place, so a later definition fully supersedes it.
    #[must_use]
    pub fn scalar<F>(mut self, name: &'static str, accessor: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> Emitted<'a> + Send + Sync + 'static,
    {
        self.insert(MemberDescriptor {
            name,
            access: Access::Scalar(Box::new(accessor)),
        });
        self
    }

    /// Register a collection member whose entries are merged flatly into
    /// the parent output.
    #[must_use]
    pub fn collection<F>(mut self, name: &'static str, accessor: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> CollectionEntries<'a> + Send + Sync + 'static,
    {
        self.insert(MemberDescriptor {
            name,
            access: Access::Collection(Box::new(accessor)),
        });
        self
    }

    /// Inherit a base type's resolved table through a projection.
    ///
    /// Base members whose names are already registered are skipped: the
    /// derived definition fully replaces the inherited one, leaving
    /// exactly one entry per name in the resolved view. Inherited members
    /// keep their relative order after all own members, so an earlier
    /// (more derived) collection still wins key collisions at encode time.
    #[must_use]
    pub fn inherit<B>(mut self, project: for<'a> fn(&'a T) -> &'a B) -> Self
    where
        B: Describe,
    {
        for base in B::table().members() {
            if self.members.iter().any(|m| m.name() == base.name()) {
                continue;
            }
            let access = match &base.access {
                Access::Scalar(f) => Access::Scalar(compose_scalar(f.as_ref(), project)),
                Access::Collection(f) => Access::Collection(compose_collection(f.as_ref(), project)),
            };
            self.members.push(MemberDescriptor {
                name: base.name(),
                access,
            });
        }
        self
    }

    /// Finish the table.
    #[must_use]
    pub fn build(self) -> MemberTable<T> {
        MemberTable {
            members: self.members,
        }
    }

    fn insert(&mut self, member: MemberDescriptor<T>) {
        if let Some(existing) = self.members.iter_mut().find(|m| m.name() == member.name()) {
            *existing = member;
        } else {
            self.members.push(member);
        }
    }
}

fn compose_scalar<T, B>(
    accessor: &'static (dyn for<'a> Fn(&'a B) -> Emitted<'a> + Send + Sync),
    project: for<'a> fn(&'a T) -> &'a B,
) -> ScalarAccessor<T>
where
    T: 'static,
    B: 'static,
{
    Box::new(move |value| accessor(project(value)))
}

fn compose_collection<T, B>(
    accessor: &'static (dyn for<'a> Fn(&'a B) -> CollectionEntries<'a> + Send + Sync),
    project: for<'a> fn(&'a T) -> &'a B,
) -> CollectionAccessor<T>
where
    T: 'static,
    B: 'static,
{
    Box::new(move |value| accessor(project(value)))
}
