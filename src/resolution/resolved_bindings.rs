use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::iter;

use either::Either;
use indexmap::IndexSet;
use lazy_static::lazy_static;
use log::trace;
use once_cell::sync::OnceCell;

use crate::defect;
use crate::misc::{unordered_hash, OwnerIndexed};
use crate::model::{
    BindingRef, BindingType, ComponentPath, ContributionBinding, ContributionType,
    HasContributionType, Key, MembersInjectionBinding, MultibindingDeclaration,
    OptionalBindingDeclaration, Scope, SubcomponentDeclaration,
};

/// Everything the resolver discovered for one key, viewed from one component.
///
/// For a valid dependency graph this contains exactly one binding; while a graph is
/// still under construction it may hold zero or several, and the single-element queries
/// ([ResolvedBindings::binding], [ResolvedBindings::contribution_binding], ...) raise a
/// [defect](crate::diagnostics::Defect) if called before validation has established
/// well-formedness.
///
/// Separate instances are used if a members-injection binding and a contribution
/// binding exist for the same key in the same component (a type with an injectable
/// constructor, injectable members, and a members-injection method on the component);
/// the two are never merged into one aggregate, and the storage makes the mixed state
/// unrepresentable.
///
/// Instances are immutable once constructed and safe to share across threads; the
/// structural hash and the flattened contribution-binding set are memoized on first
/// access ([OnceCell] publishes at most one computed value, redundant concurrent
/// computation is discarded).
#[derive(Debug, Clone)]
pub struct ResolvedBindings {
    key: Key,
    resolving_component: ComponentPath,
    bindings: BindingsByOwner,
    multibinding_declarations: IndexSet<MultibindingDeclaration>,
    subcomponent_declarations: IndexSet<SubcomponentDeclaration>,
    optional_binding_declarations: IndexSet<OptionalBindingDeclaration>,
    // Memoized derived values, excluded from equality
    hash_cache: OnceCell<u64>,
    contribution_bindings_cache: OnceCell<IndexSet<ContributionBinding>>,
}

/// The owner-indexed bindings for a key: either contribution bindings (possibly none)
/// or exactly one members-injection binding, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BindingsByOwner {
    Contribution(OwnerIndexed<ContributionBinding>),
    MembersInjection { owner: ComponentPath, binding: MembersInjectionBinding },
}

lazy_static! {
    static ref NO_CONTRIBUTIONS: IndexSet<ContributionBinding> = IndexSet::new();
}

impl ResolvedBindings {
    /// Aggregate for contribution bindings resolved in `owning_component` or its
    /// ancestors, indexed by the component that owns each binding, plus the key's
    /// multibinding, subcomponent, and optional-binding declarations.
    ///
    /// Defects: a binding or declaration whose key is not `key`, a binding owned by a
    /// component that is not ancestor-or-self of `owning_component`, or a binding
    /// listed under two owners.
    pub fn for_contribution_bindings(
        key: Key,
        owning_component: ComponentPath,
        contribution_bindings: impl IntoIterator<Item = (ComponentPath, ContributionBinding)>,
        multibinding_declarations: impl IntoIterator<Item = MultibindingDeclaration>,
        subcomponent_declarations: impl IntoIterator<Item = SubcomponentDeclaration>,
        optional_binding_declarations: impl IntoIterator<Item = OptionalBindingDeclaration>,
    ) -> Self {
        let mut by_owner = OwnerIndexed::new();
        for (owner, binding) in contribution_bindings {
            if !owner.is_ancestor_or_self_of(&owning_component) {
                defect!(ForeignOwner { key, owner, resolving: owning_component });
            }
            if *binding.key() != key {
                defect!(WrongKey { expected: key, found: binding.key().clone() });
            }
            by_owner.insert(owner, binding);
        }
        trace!(
            "resolved {} in {}: {} contribution bindings across {} owners",
            key,
            owning_component,
            by_owner.len(),
            by_owner.owners().count()
        );
        ResolvedBindings {
            multibinding_declarations: checked_declarations(
                &key,
                multibinding_declarations,
                MultibindingDeclaration::key,
            ),
            subcomponent_declarations: checked_declarations(
                &key,
                subcomponent_declarations,
                SubcomponentDeclaration::key,
            ),
            optional_binding_declarations: checked_declarations(
                &key,
                optional_binding_declarations,
                OptionalBindingDeclaration::key,
            ),
            key,
            resolving_component: owning_component,
            bindings: BindingsByOwner::Contribution(by_owner),
            hash_cache: OnceCell::new(),
            contribution_bindings_cache: OnceCell::new(),
        }
    }

    /// Aggregate for the members-injection binding owned by `owning_component`.
    /// All other collections are empty.
    pub fn for_members_injection_binding(
        key: Key,
        owning_component: ComponentPath,
        binding: MembersInjectionBinding,
    ) -> Self {
        if *binding.key() != key {
            defect!(WrongKey { expected: key, found: binding.key().clone() });
        }
        trace!("resolved {} in {}: members-injection binding", key, owning_component);
        ResolvedBindings {
            key,
            resolving_component: owning_component.clone(),
            bindings: BindingsByOwner::MembersInjection { owner: owning_component, binding },
            multibinding_declarations: IndexSet::new(),
            subcomponent_declarations: IndexSet::new(),
            optional_binding_declarations: IndexSet::new(),
            hash_cache: OnceCell::new(),
            contribution_bindings_cache: OnceCell::new(),
        }
    }

    /// Aggregate for when nothing was resolved for `key`: all collections empty, but
    /// the scope context exists.
    pub fn no_bindings(key: Key, owning_component: ComponentPath) -> Self {
        trace!("resolved {} in {}: no bindings", key, owning_component);
        ResolvedBindings {
            key,
            resolving_component: owning_component,
            bindings: BindingsByOwner::Contribution(OwnerIndexed::new()),
            multibinding_declarations: IndexSet::new(),
            subcomponent_declarations: IndexSet::new(),
            optional_binding_declarations: IndexSet::new(),
            hash_cache: OnceCell::new(),
            contribution_bindings_cache: OnceCell::new(),
        }
    }

    /// The same resolution re-hosted at `resolving_component`, for a component that
    /// inherits an ancestor's resolution without re-resolving the key. Owner-indexed
    /// data is carried over unchanged, never re-derived.
    ///
    /// Defect: a binding owner that is not ancestor-or-self of the new component (a
    /// resolution can only be inherited within the owners' subtrees).
    pub fn as_inherited_in(&self, resolving_component: ComponentPath) -> Self {
        for (owner, _) in self.all_bindings() {
            if !owner.is_ancestor_or_self_of(&resolving_component) {
                defect!(NotInheritable {
                    key: self.key.clone(),
                    owner: owner.clone(),
                    to: resolving_component,
                });
            }
        }
        trace!("inheriting resolution of {} in {}", self.key, resolving_component);
        ResolvedBindings {
            key: self.key.clone(),
            resolving_component,
            bindings: self.bindings.clone(),
            multibinding_declarations: self.multibinding_declarations.clone(),
            subcomponent_declarations: self.subcomponent_declarations.clone(),
            optional_binding_declarations: self.optional_binding_declarations.clone(),
            // The flattened contribution set is scope-invariant, so keep it; the hash
            // covers the resolving component, so it must be recomputed
            hash_cache: OnceCell::new(),
            contribution_bindings_cache: self.contribution_bindings_cache.clone(),
        }
    }

    /// The key these bindings were resolved for
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// The component in whose context this resolution is viewed
    pub fn resolving_component(&self) -> &ComponentPath {
        &self.resolving_component
    }

    pub fn multibinding_declarations(&self) -> &IndexSet<MultibindingDeclaration> {
        &self.multibinding_declarations
    }

    pub fn subcomponent_declarations(&self) -> &IndexSet<SubcomponentDeclaration> {
        &self.subcomponent_declarations
    }

    pub fn optional_binding_declarations(&self) -> &IndexSet<OptionalBindingDeclaration> {
        &self.optional_binding_declarations
    }

    /// All bindings with their owning components, whichever kind is populated
    pub fn all_bindings(&self) -> impl Iterator<Item = (&ComponentPath, BindingRef<'_>)> {
        match &self.bindings {
            BindingsByOwner::Contribution(by_owner) => Either::Left(
                by_owner
                    .iter()
                    .map(|(owner, binding)| (owner, BindingRef::Contribution(binding))),
            ),
            BindingsByOwner::MembersInjection { owner, binding } => Either::Right(iter::once((
                owner,
                BindingRef::MembersInjection(binding),
            ))),
        }
    }

    /// All bindings regardless of owner, deduplicated
    pub fn bindings(&self) -> IndexSet<BindingRef<'_>> {
        self.all_bindings().map(|(_, binding)| binding).collect()
    }

    /// The single binding. Defect if there is not exactly one, which never happens for
    /// keys in valid graphs.
    pub fn binding(&self) -> BindingRef<'_> {
        let bindings = self.bindings();
        if bindings.len() != 1 {
            defect!(NotExactlyOne {
                what: "binding",
                key: self.key.clone(),
                found: bindings.len(),
            });
        }
        bindings[0]
    }

    /// Whether there are no bindings and no declarations of any kind
    pub fn is_empty(&self) -> bool {
        self.all_bindings().next().is_none()
            && self.multibinding_declarations.is_empty()
            && self.optional_binding_declarations.is_empty()
            && self.subcomponent_declarations.is_empty()
    }

    /// The bindings owned by exactly `component`. Empty if it owns none; owning nothing
    /// is not an error.
    pub fn bindings_owned_by(&self, component: &ComponentPath) -> IndexSet<BindingRef<'_>> {
        self.all_bindings()
            .filter(|(owner, _)| *owner == component)
            .map(|(_, binding)| binding)
            .collect()
    }

    /// All contribution bindings regardless of owner. Empty if this aggregate holds a
    /// members-injection binding. Memoized.
    pub fn contribution_bindings(&self) -> &IndexSet<ContributionBinding> {
        match &self.bindings {
            BindingsByOwner::Contribution(by_owner) => self
                .contribution_bindings_cache
                .get_or_init(|| by_owner.values().cloned().collect()),
            BindingsByOwner::MembersInjection { .. } => &NO_CONTRIBUTIONS,
        }
    }

    /// The component that owns `binding`. Defect if `binding` is not one of this
    /// aggregate's [contribution bindings](ResolvedBindings::contribution_bindings).
    pub fn owning_component(&self, binding: &ContributionBinding) -> &ComponentPath {
        let owner = match &self.bindings {
            BindingsByOwner::Contribution(by_owner) => by_owner.owner_of(binding),
            BindingsByOwner::MembersInjection { .. } => None,
        };
        match owner {
            Some(owner) => owner,
            None => defect!(UnownedBinding {
                key: self.key.clone(),
                binding: format!("{:?}", binding),
            }),
        }
    }

    /// The members-injection binding, or [None] if these are contribution bindings.
    /// Never ambiguous: the members-injection variant holds exactly one binding.
    pub fn members_injection_binding(&self) -> Option<&MembersInjectionBinding> {
        match &self.bindings {
            BindingsByOwner::MembersInjection { binding, .. } => Some(binding),
            BindingsByOwner::Contribution(_) => None,
        }
    }

    /// Whether this is a single contribution to a set or map multibinding
    pub fn is_multibinding_contribution(&self) -> bool {
        self.contribution_bindings().len() == 1
            && self.contribution_binding().contribution_type().is_multibinding()
    }

    /// The single contribution binding. Defect if there is not exactly one, which never
    /// happens for keys in valid graphs.
    pub fn contribution_binding(&self) -> &ContributionBinding {
        let contributions = self.contribution_bindings();
        if contributions.len() != 1 {
            defect!(NotExactlyOne {
                what: "contribution binding",
                key: self.key.clone(),
                found: contributions.len(),
            });
        }
        &contributions[0]
    }

    /// The binding type of these bindings. If there are multibinding or subcomponent
    /// declarations but no bindings, the key is provision-shaped.
    ///
    /// Defects: [empty](ResolvedBindings::is_empty) aggregate, or bindings of
    /// conflicting types (a graph error that validation must have caught earlier).
    pub fn binding_type(&self) -> BindingType {
        if self.is_empty() {
            defect!(EmptyBindings { key: self.key.clone() });
        }
        let binding_types = self.binding_types();
        if binding_types.is_empty()
            && (!self.multibinding_declarations.is_empty()
                || !self.subcomponent_declarations.is_empty())
        {
            // Only declarations, so assume provision
            return BindingType::Provision;
        }
        if binding_types.len() != 1 {
            defect!(ConflictingBindingTypes {
                key: self.key.clone(),
                types: binding_types.into_iter().collect(),
            });
        }
        binding_types[0]
    }

    /// The distinct binding types across all bindings, for diagnostics
    pub fn binding_types(&self) -> IndexSet<BindingType> {
        self.all_bindings().map(|(_, binding)| binding.binding_type()).collect()
    }

    /// The scope annotation of the single binding. Defect if there is not exactly one
    /// binding.
    pub fn scope(&self) -> Option<&Scope> {
        self.binding().scope()
    }

    /// The memoized structural hash over all equality-relevant fields. Deterministic
    /// and independent of factory input iteration order.
    pub fn structural_hash(&self) -> u64 {
        *self.hash_cache.get_or_init(|| self.compute_hash())
    }

    fn compute_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.key.hash(&mut hasher);
        self.resolving_component.hash(&mut hasher);
        match &self.bindings {
            BindingsByOwner::Contribution(by_owner) => {
                hasher.write_u8(0);
                hasher.write_u64(by_owner.unordered_hash());
            }
            BindingsByOwner::MembersInjection { owner, binding } => {
                hasher.write_u8(1);
                owner.hash(&mut hasher);
                binding.hash(&mut hasher);
            }
        }
        hasher.write_u64(unordered_hash(&self.multibinding_declarations));
        hasher.write_u64(unordered_hash(&self.subcomponent_declarations));
        hasher.write_u64(unordered_hash(&self.optional_binding_declarations));
        hasher.finish()
    }
}

/// The contribution type of the single contribution binding. Defect if there is not
/// exactly one.
impl HasContributionType for ResolvedBindings {
    fn contribution_type(&self) -> ContributionType {
        self.contribution_binding().contribution_type()
    }
}

// Memo caches are excluded: they are derived from the compared fields
impl PartialEq for ResolvedBindings {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.resolving_component == other.resolving_component
            && self.bindings == other.bindings
            && self.multibinding_declarations == other.multibinding_declarations
            && self.subcomponent_declarations == other.subcomponent_declarations
            && self.optional_binding_declarations == other.optional_binding_declarations
    }
}

impl Eq for ResolvedBindings {}

impl Hash for ResolvedBindings {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}

fn checked_declarations<D: Eq + Hash>(
    key: &Key,
    declarations: impl IntoIterator<Item = D>,
    key_of: impl Fn(&D) -> &Key,
) -> IndexSet<D> {
    declarations
        .into_iter()
        .inspect(|declaration| {
            if key_of(declaration) != key {
                defect!(WrongKey {
                    expected: key.clone(),
                    found: key_of(declaration).clone(),
                });
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use indexmap::IndexSet;
    use test_log::test;

    use crate::model::{
        BindingRef, BindingType, ComponentPath, ContributionBinding, ContributionType,
        HasContributionType, Key, MembersInjectionBinding, MultibindingDeclaration,
        OptionalBindingDeclaration, Scope, SubcomponentDeclaration,
    };
    use crate::resolution::ResolvedBindings;

    fn app() -> ComponentPath {
        ComponentPath::root("AppComponent")
    }

    fn activity() -> ComponentPath {
        app().child_path("ActivityComponent")
    }

    fn fragment() -> ComponentPath {
        activity().child_path("FragmentComponent")
    }

    fn foo() -> Key {
        Key::new("Foo")
    }

    fn unique(provided_by: &str) -> ContributionBinding {
        ContributionBinding::provision(foo(), provided_by, ContributionType::Unique)
    }

    fn set_element(provided_by: &str) -> ContributionBinding {
        ContributionBinding::provision(foo(), provided_by, ContributionType::Set)
    }

    fn resolved(
        owner: ComponentPath,
        bindings: Vec<(ComponentPath, ContributionBinding)>,
    ) -> ResolvedBindings {
        ResolvedBindings::for_contribution_bindings(foo(), owner, bindings, [], [], [])
    }

    #[test]
    fn no_bindings_is_empty() {
        let resolved = ResolvedBindings::no_bindings(foo(), app());
        assert!(resolved.is_empty());
        assert!(resolved.bindings().is_empty());
        assert!(resolved.contribution_bindings().is_empty());
        assert_eq!(resolved.members_injection_binding(), None);
        assert!(!resolved.is_multibinding_contribution());
    }

    #[test]
    fn empty_iff_no_bindings_and_no_declarations() {
        let optional_only = ResolvedBindings::for_contribution_bindings(
            foo(),
            app(),
            [],
            [],
            [],
            [OptionalBindingDeclaration::new(foo())],
        );
        assert!(!optional_only.is_empty());
        assert!(optional_only.bindings().is_empty());

        let multibinding_only = ResolvedBindings::for_contribution_bindings(
            foo(),
            app(),
            [],
            [MultibindingDeclaration::new(foo(), ContributionType::Set)],
            [],
            [],
        );
        assert!(!multibinding_only.is_empty());
    }

    #[test]
    fn bindings_owned_by_filters_on_exact_owner() {
        let b1 = unique("provideFoo");
        let resolved = resolved(activity(), vec![(activity(), b1.clone())]);

        let expected: IndexSet<BindingRef> = [BindingRef::Contribution(&b1)].into_iter().collect();
        assert_eq!(resolved.bindings_owned_by(&activity()), expected);
        assert!(resolved.bindings_owned_by(&app()).is_empty());
        assert!(resolved.bindings_owned_by(&fragment()).is_empty());
    }

    #[test]
    fn owning_component_reverse_lookup() {
        let inherited = set_element("provideBase");
        let local = set_element("provideExtra");
        let resolved = resolved(
            activity(),
            vec![(app(), inherited.clone()), (activity(), local.clone())],
        );
        assert_eq!(resolved.owning_component(&inherited), &app());
        assert_eq!(resolved.owning_component(&local), &activity());
    }

    #[test]
    #[should_panic(expected = "defect: binding is not resolved for Foo")]
    fn owning_component_of_unresolved_binding_is_a_defect() {
        let resolved = resolved(app(), vec![(app(), unique("provideFoo"))]);
        resolved.owning_component(&unique("someOtherFoo"));
    }

    #[test]
    #[should_panic(expected = "defect: empty bindings for Foo")]
    fn binding_type_of_empty_resolution_is_a_defect() {
        ResolvedBindings::no_bindings(foo(), app()).binding_type();
    }

    #[test]
    fn multibinding_contributions_from_two_owners() {
        let resolved = resolved(
            activity(),
            vec![(app(), set_element("provideBase")), (activity(), set_element("provideExtra"))],
        );
        assert_eq!(resolved.binding_type(), BindingType::Provision);
        assert_eq!(resolved.binding_types().len(), 1);
        assert_eq!(resolved.contribution_bindings().len(), 2);
        // Two contributions, so not the single-contribution case
        assert!(!resolved.is_multibinding_contribution());
    }

    #[test]
    fn subcomponent_declaration_alone_implies_provision() {
        let resolved = ResolvedBindings::for_contribution_bindings(
            foo(),
            app(),
            [],
            [],
            [SubcomponentDeclaration::new(foo(), "ChildComponent")],
            [],
        );
        assert!(!resolved.is_empty());
        assert!(resolved.bindings().is_empty());
        assert_eq!(resolved.binding_type(), BindingType::Provision);
    }

    #[test]
    fn multibinding_declaration_alone_implies_provision() {
        let resolved = ResolvedBindings::for_contribution_bindings(
            foo(),
            app(),
            [],
            [MultibindingDeclaration::new(foo(), ContributionType::Map)],
            [],
            [],
        );
        assert_eq!(resolved.binding_type(), BindingType::Provision);
    }

    #[test]
    fn contribution_binding_when_exactly_one() {
        let b1 = unique("provideFoo");
        let resolved = resolved(app(), vec![(app(), b1.clone())]);
        assert_eq!(resolved.contribution_binding(), &b1);
        assert_eq!(resolved.binding(), BindingRef::Contribution(&b1));
    }

    #[test]
    #[should_panic(expected = "defect: expected exactly one contribution binding for Foo, found 0")]
    fn contribution_binding_of_empty_resolution_is_a_defect() {
        ResolvedBindings::no_bindings(foo(), app()).contribution_binding();
    }

    #[test]
    #[should_panic(expected = "defect: expected exactly one contribution binding for Foo, found 2")]
    fn contribution_binding_of_two_is_a_defect() {
        resolved(app(), vec![(app(), set_element("a")), (app(), set_element("b"))])
            .contribution_binding();
    }

    #[test]
    #[should_panic(expected = "defect: expected exactly one binding for Foo, found 0")]
    fn binding_of_empty_resolution_is_a_defect() {
        ResolvedBindings::no_bindings(foo(), app()).binding();
    }

    #[test]
    #[should_panic(expected = "defect: expected exactly one binding for Foo, found 2")]
    fn binding_of_two_is_a_defect() {
        resolved(app(), vec![(app(), set_element("a")), (app(), set_element("b"))]).binding();
    }

    #[test]
    fn members_injection_resolution() {
        let binding = MembersInjectionBinding::new(foo());
        let resolved =
            ResolvedBindings::for_members_injection_binding(foo(), activity(), binding.clone());

        assert!(!resolved.is_empty());
        assert_eq!(resolved.members_injection_binding(), Some(&binding));
        assert_eq!(resolved.binding(), BindingRef::MembersInjection(&binding));
        assert_eq!(resolved.binding_type(), BindingType::MembersInjection);
        assert!(resolved.contribution_bindings().is_empty());
        assert!(!resolved.is_multibinding_contribution());
        assert_eq!(resolved.scope(), None);
        let expected: IndexSet<BindingRef> =
            [BindingRef::MembersInjection(&binding)].into_iter().collect();
        assert_eq!(resolved.bindings_owned_by(&activity()), expected);
    }

    #[test]
    #[should_panic(expected = "defect: conflicting binding types for Foo")]
    fn conflicting_binding_types_are_a_defect() {
        let provision = ContributionBinding::provision(foo(), "provideFoo", ContributionType::Set);
        let production =
            ContributionBinding::production(foo(), "produceFoo", ContributionType::Set);
        let resolved = resolved(app(), vec![(app(), provision), (app(), production)]);
        assert_eq!(resolved.binding_types().len(), 2);
        resolved.binding_type();
    }

    #[test]
    fn single_multibinding_contribution() {
        let resolved = resolved(app(), vec![(app(), set_element("provideElement"))]);
        assert!(resolved.is_multibinding_contribution());

        let unique = resolved_unique();
        assert!(!unique.is_multibinding_contribution());
    }

    fn resolved_unique() -> ResolvedBindings {
        resolved(app(), vec![(app(), unique("provideFoo"))])
    }

    #[test]
    fn contribution_type_delegates_to_the_single_binding() {
        let map_contribution =
            ContributionBinding::provision(foo(), "provideEntry", ContributionType::Map);
        let resolved = resolved(app(), vec![(app(), map_contribution)]);
        assert_eq!(resolved.contribution_type(), ContributionType::Map);
    }

    #[test]
    fn scope_of_the_single_binding() {
        let binding = unique("provideFoo").scoped(Scope::new("Singleton"));
        let resolved = resolved(app(), vec![(app(), binding)]);
        assert_eq!(resolved.scope().unwrap().name(), "Singleton");

        assert_eq!(resolved_unique().scope(), None);
    }

    #[test]
    fn equal_regardless_of_factory_input_order() {
        let b1 = set_element("provideBase");
        let b2 = set_element("provideExtra");
        let forward = resolved(activity(), vec![(app(), b1.clone()), (activity(), b2.clone())]);
        let backward = resolved(activity(), vec![(activity(), b2), (app(), b1)]);

        assert_eq!(forward, backward);
        assert_eq!(forward.structural_hash(), backward.structural_hash());
    }

    #[test]
    fn resolving_component_participates_in_equality() {
        let original = resolved(app(), vec![(app(), unique("provideFoo"))]);
        let inherited = original.as_inherited_in(activity());

        assert_ne!(original, inherited);
        assert_eq!(inherited.resolving_component(), &activity());

        let round_tripped = inherited.as_inherited_in(app());
        assert_eq!(round_tripped, original);
        assert_eq!(round_tripped.structural_hash(), original.structural_hash());
    }

    #[test]
    fn inheriting_preserves_owner_indexed_data() {
        let b1 = unique("provideFoo");
        let original = resolved(app(), vec![(app(), b1.clone())]);
        let inherited = original.as_inherited_in(fragment());

        let expected: IndexSet<BindingRef> = [BindingRef::Contribution(&b1)].into_iter().collect();
        assert_eq!(inherited.bindings_owned_by(&app()), expected);
        assert!(inherited.bindings_owned_by(&fragment()).is_empty());
        assert_eq!(inherited.owning_component(&b1), &app());
        assert_eq!(inherited.key(), original.key());
    }

    #[test]
    #[should_panic(expected = "defect: OtherComponent cannot inherit the resolution of Foo")]
    fn inheriting_outside_the_owner_subtree_is_a_defect() {
        let original = resolved(activity(), vec![(activity(), unique("provideFoo"))]);
        original.as_inherited_in(ComponentPath::root("OtherComponent"));
    }

    #[test]
    fn empty_resolution_can_be_inherited_anywhere() {
        let original = ResolvedBindings::no_bindings(foo(), activity());
        let rehosted = original.as_inherited_in(ComponentPath::root("OtherComponent"));
        assert!(rehosted.is_empty());
    }

    #[test]
    #[should_panic(expected = "not an ancestor of resolving component")]
    fn owner_below_the_resolving_component_is_a_defect() {
        resolved(activity(), vec![(fragment(), unique("provideFoo"))]);
    }

    #[test]
    #[should_panic(expected = "defect: binding for Bar cannot satisfy a request for Foo")]
    fn binding_with_the_wrong_key_is_a_defect() {
        let stray =
            ContributionBinding::provision(Key::new("Bar"), "provideBar", ContributionType::Unique);
        resolved(app(), vec![(app(), stray)]);
    }

    #[test]
    #[should_panic(expected = "defect: binding for Bar cannot satisfy a request for Foo")]
    fn members_injection_binding_with_the_wrong_key_is_a_defect() {
        ResolvedBindings::for_members_injection_binding(
            foo(),
            app(),
            MembersInjectionBinding::new(Key::new("Bar")),
        );
    }

    #[test]
    fn hashes_of_equal_aggregates_agree() {
        let a = resolved(app(), vec![(app(), set_element("provideElement"))]);
        let b = resolved(app(), vec![(app(), set_element("provideElement"))]);
        assert_eq!(a, b);
        assert_eq!(a.structural_hash(), b.structural_hash());

        let different = resolved(app(), vec![(app(), set_element("provideOther"))]);
        assert_ne!(a, different);
    }
}
