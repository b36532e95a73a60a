use std::ops::Deref;
use std::rc::Rc;

use sdai_typed::prelude::*;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum IfcWallTypeEnum {
    MOVABLE,
    PARAPET,
    PARTITIONING,
    SHEAR,
    SOLIDWALL,
    STANDARD,
    USERDEFINED,
    NOTDEFINED,
}

impl Enumeration for IfcWallTypeEnum {
    const TABLE: EnumTable = EnumTable::new(&["MOVABLE", "PARAPET", "PARTITIONING", "SHEAR", "SOLIDWALL", "STANDARD", "USERDEFINED", "NOTDEFINED"]);

    fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(IfcWallTypeEnum::MOVABLE),
            1 => Some(IfcWallTypeEnum::PARAPET),
            2 => Some(IfcWallTypeEnum::PARTITIONING),
            3 => Some(IfcWallTypeEnum::SHEAR),
            4 => Some(IfcWallTypeEnum::SOLIDWALL),
            5 => Some(IfcWallTypeEnum::STANDARD),
            6 => Some(IfcWallTypeEnum::USERDEFINED),
            7 => Some(IfcWallTypeEnum::NOTDEFINED),
            _ => None,
        }
    }

    fn index(self: Self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone)]
pub struct IfcSimpleValue<'s>(pub Select<'s>);

impl<'s> IfcSimpleValue<'s> {
    pub const TABLE: SelectTable = SelectTable {
        name: "IfcSimpleValue",
        alternatives: &[
            Alternative { name: "IfcInteger", category: AltCategory::Value },
            Alternative { name: "IfcBoolean", category: AltCategory::Value },
            Alternative { name: "IfcLogical", category: AltCategory::Value },
            Alternative { name: "IfcLabel", category: AltCategory::Value },
            Alternative { name: "IfcText", category: AltCategory::Value },
            Alternative { name: "IfcIdentifier", category: AltCategory::Value },
            Alternative { name: "IfcBinary", category: AltCategory::Value },
        ],
    };

    pub fn new(store: &'s dyn Store, instance: Instance, attr: &str) -> Self {
        IfcSimpleValue(Select::new(store, instance, attr))
    }

    pub fn detached(store: &'s dyn Store, instance: Instance) -> Self {
        IfcSimpleValue(Select::detached(store, instance))
    }

    pub fn which(self: &Self) -> Option<&'static Alternative> {
        self.0.which(&Self::TABLE)
    }

    pub fn is_ifc_integer(self: &Self) -> bool {
        self.0.is_type(Some("IfcInteger"))
    }

    pub fn get_ifc_integer(self: &Self) -> Option<i64> {
        self.0.get_simple(Some("IfcInteger"), PayloadKind::Integer)
    }

    pub fn put_ifc_integer(self: &Self, value: i64) {
        self.0.put_simple("IfcInteger", PayloadKind::Integer, value)
    }

    pub fn is_ifc_boolean(self: &Self) -> bool {
        self.0.is_type(Some("IfcBoolean"))
    }

    pub fn get_ifc_boolean(self: &Self) -> Option<bool> {
        self.0.get_simple(Some("IfcBoolean"), PayloadKind::Boolean)
    }

    pub fn put_ifc_boolean(self: &Self, value: bool) {
        self.0.put_simple("IfcBoolean", PayloadKind::Boolean, value)
    }

    pub fn is_ifc_logical(self: &Self) -> bool {
        self.0.is_type(Some("IfcLogical"))
    }

    pub fn get_ifc_logical(self: &Self) -> Option<Logical> {
        self.0.get_enum(Some("IfcLogical"))
    }

    pub fn put_ifc_logical(self: &Self, value: Logical) {
        self.0.put_enum("IfcLogical", value)
    }

    pub fn is_ifc_label(self: &Self) -> bool {
        self.0.is_type(Some("IfcLabel"))
    }

    pub fn get_ifc_label(self: &Self) -> Option<Rc<str>> {
        self.0.get_text(Some("IfcLabel"), PayloadKind::String)
    }

    pub fn put_ifc_label(self: &Self, value: &str) {
        self.0.put_text("IfcLabel", PayloadKind::String, value)
    }

    pub fn is_ifc_text(self: &Self) -> bool {
        self.0.is_type(Some("IfcText"))
    }

    pub fn get_ifc_text(self: &Self) -> Option<Rc<str>> {
        self.0.get_text(Some("IfcText"), PayloadKind::String)
    }

    pub fn put_ifc_text(self: &Self, value: &str) {
        self.0.put_text("IfcText", PayloadKind::String, value)
    }

    pub fn is_ifc_identifier(self: &Self) -> bool {
        self.0.is_type(Some("IfcIdentifier"))
    }

    pub fn get_ifc_identifier(self: &Self) -> Option<Rc<str>> {
        self.0.get_text(Some("IfcIdentifier"), PayloadKind::String)
    }

    pub fn put_ifc_identifier(self: &Self, value: &str) {
        self.0.put_text("IfcIdentifier", PayloadKind::String, value)
    }

    pub fn is_ifc_binary(self: &Self) -> bool {
        self.0.is_type(Some("IfcBinary"))
    }

    pub fn get_ifc_binary(self: &Self) -> Option<Rc<str>> {
        self.0.get_text(Some("IfcBinary"), PayloadKind::Binary)
    }

    pub fn put_ifc_binary(self: &Self, value: &str) {
        self.0.put_text("IfcBinary", PayloadKind::Binary, value)
    }
}

impl<'s> Deref for IfcSimpleValue<'s> {
    type Target = Select<'s>;

    fn deref(&self) -> &Select<'s> {
        &self.0
    }
}

impl<'s> SelectWrapper<'s> for IfcSimpleValue<'s> {
    fn wrap(select: Select<'s>) -> Self {
        IfcSimpleValue(select)
    }

    fn select(self: &Self) -> &Select<'s> {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct IfcMeasureValue<'s>(pub Select<'s>);

impl<'s> IfcMeasureValue<'s> {
    pub const TABLE: SelectTable = SelectTable {
        name: "IfcMeasureValue",
        alternatives: &[
            Alternative { name: "IfcLengthMeasure", category: AltCategory::Value },
            Alternative { name: "IfcPositiveLengthMeasure", category: AltCategory::Value },
            Alternative { name: "IfcCountMeasure", category: AltCategory::Value },
            Alternative { name: "IfcCompoundPlaneAngleMeasure", category: AltCategory::Value },
            Alternative { name: "IfcComplexNumber", category: AltCategory::Value },
        ],
    };

    pub fn new(store: &'s dyn Store, instance: Instance, attr: &str) -> Self {
        IfcMeasureValue(Select::new(store, instance, attr))
    }

    pub fn detached(store: &'s dyn Store, instance: Instance) -> Self {
        IfcMeasureValue(Select::detached(store, instance))
    }

    pub fn which(self: &Self) -> Option<&'static Alternative> {
        self.0.which(&Self::TABLE)
    }

    pub fn is_ifc_length_measure(self: &Self) -> bool {
        self.0.is_type(Some("IfcLengthMeasure"))
    }

    pub fn get_ifc_length_measure(self: &Self) -> Option<f64> {
        self.0.get_simple(Some("IfcLengthMeasure"), PayloadKind::Real)
    }

    pub fn put_ifc_length_measure(self: &Self, value: f64) {
        self.0.put_simple("IfcLengthMeasure", PayloadKind::Real, value)
    }

    pub fn is_ifc_positive_length_measure(self: &Self) -> bool {
        self.0.is_type(Some("IfcPositiveLengthMeasure"))
    }

    pub fn get_ifc_positive_length_measure(self: &Self) -> Option<f64> {
        self.0.get_simple(Some("IfcPositiveLengthMeasure"), PayloadKind::Real)
    }

    pub fn put_ifc_positive_length_measure(self: &Self, value: f64) {
        self.0.put_simple("IfcPositiveLengthMeasure", PayloadKind::Real, value)
    }

    pub fn is_ifc_count_measure(self: &Self) -> bool {
        self.0.is_type(Some("IfcCountMeasure"))
    }

    pub fn get_ifc_count_measure(self: &Self) -> Option<i64> {
        self.0.get_simple(Some("IfcCountMeasure"), PayloadKind::Integer)
    }

    pub fn put_ifc_count_measure(self: &Self, value: i64) {
        self.0.put_simple("IfcCountMeasure", PayloadKind::Integer, value)
    }

    pub fn is_ifc_compound_plane_angle_measure(self: &Self) -> bool {
        self.0.is_type(Some("IfcCompoundPlaneAngleMeasure"))
    }

    pub fn get_ifc_compound_plane_angle_measure(self: &Self) -> Option<Vec<i64>> {
        self.0.get_aggregate_as(Some("IfcCompoundPlaneAngleMeasure"), &ScalarMarshaller::<i64>::new())
    }

    pub fn put_ifc_compound_plane_angle_measure(self: &Self, value: &[i64]) {
        self.0.put_aggregate_from("IfcCompoundPlaneAngleMeasure", &ScalarMarshaller::<i64>::new(), value)
    }

    pub fn is_ifc_complex_number(self: &Self) -> bool {
        self.0.is_type(Some("IfcComplexNumber"))
    }

    pub fn get_ifc_complex_number(self: &Self) -> Option<Vec<f64>> {
        self.0.get_aggregate_as(Some("IfcComplexNumber"), &ScalarMarshaller::<f64>::new())
    }

    pub fn put_ifc_complex_number(self: &Self, value: &[f64]) {
        self.0.put_aggregate_from("IfcComplexNumber", &ScalarMarshaller::<f64>::new(), value)
    }
}

impl<'s> Deref for IfcMeasureValue<'s> {
    type Target = Select<'s>;

    fn deref(&self) -> &Select<'s> {
        &self.0
    }
}

impl<'s> SelectWrapper<'s> for IfcMeasureValue<'s> {
    fn wrap(select: Select<'s>) -> Self {
        IfcMeasureValue(select)
    }

    fn select(self: &Self) -> &Select<'s> {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct IfcValue<'s>(pub Select<'s>);

impl<'s> IfcValue<'s> {
    pub const TABLE: SelectTable = SelectTable {
        name: "IfcValue",
        alternatives: &[
            Alternative { name: "IfcMeasureValue", category: AltCategory::Select },
            Alternative { name: "IfcSimpleValue", category: AltCategory::Select },
        ],
    };

    pub fn new(store: &'s dyn Store, instance: Instance, attr: &str) -> Self {
        IfcValue(Select::new(store, instance, attr))
    }

    pub fn detached(store: &'s dyn Store, instance: Instance) -> Self {
        IfcValue(Select::detached(store, instance))
    }

    pub fn which(self: &Self) -> Option<&'static Alternative> {
        self.0.which(&Self::TABLE)
    }

    pub fn is_ifc_measure_value(self: &Self) -> bool {
        self.0.is_nested("IfcMeasureValue")
    }

    pub fn get_ifc_measure_value(self: &Self) -> IfcMeasureValue<'_> {
        IfcMeasureValue(self.0.nested("IfcMeasureValue"))
    }

    pub fn put_ifc_measure_value(self: &Self) -> IfcMeasureValue<'_> {
        IfcMeasureValue(self.0.nested("IfcMeasureValue"))
    }

    pub fn is_ifc_simple_value(self: &Self) -> bool {
        self.0.is_nested("IfcSimpleValue")
    }

    pub fn get_ifc_simple_value(self: &Self) -> IfcSimpleValue<'_> {
        IfcSimpleValue(self.0.nested("IfcSimpleValue"))
    }

    pub fn put_ifc_simple_value(self: &Self) -> IfcSimpleValue<'_> {
        IfcSimpleValue(self.0.nested("IfcSimpleValue"))
    }
}

impl<'s> Deref for IfcValue<'s> {
    type Target = Select<'s>;

    fn deref(&self) -> &Select<'s> {
        &self.0
    }
}

impl<'s> SelectWrapper<'s> for IfcValue<'s> {
    fn wrap(select: Select<'s>) -> Self {
        IfcValue(select)
    }

    fn select(self: &Self) -> &Select<'s> {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct IfcMetricValueSelect<'s>(pub Select<'s>);

impl<'s> IfcMetricValueSelect<'s> {
    pub const TABLE: SelectTable = SelectTable {
        name: "IfcMetricValueSelect",
        alternatives: &[
            Alternative { name: "IfcTable", category: AltCategory::Entity },
            Alternative { name: "IfcValue", category: AltCategory::Select },
        ],
    };

    pub fn new(store: &'s dyn Store, instance: Instance, attr: &str) -> Self {
        IfcMetricValueSelect(Select::new(store, instance, attr))
    }

    pub fn detached(store: &'s dyn Store, instance: Instance) -> Self {
        IfcMetricValueSelect(Select::detached(store, instance))
    }

    pub fn which(self: &Self) -> Option<&'static Alternative> {
        self.0.which(&Self::TABLE)
    }

    pub fn is_ifc_table(self: &Self) -> bool {
        self.0.is_entity("IfcTable")
    }

    pub fn get_ifc_table(self: &Self) -> Option<IfcTable<'s>> {
        self.0
            .get_entity_instance(Some("IfcTable"))
            .map(|instance| IfcTable(Entity::new(self.0.store(), instance)))
    }

    pub fn put_ifc_table(self: &Self, value: impl Into<Instance>) -> Result<(), PutError> {
        self.0.put_entity_instance("IfcTable", value.into())
    }

    pub fn is_ifc_value(self: &Self) -> bool {
        self.0.is_nested("IfcValue")
    }

    pub fn get_ifc_value(self: &Self) -> IfcValue<'_> {
        IfcValue(self.0.nested("IfcValue"))
    }

    pub fn put_ifc_value(self: &Self) -> IfcValue<'_> {
        IfcValue(self.0.nested("IfcValue"))
    }
}

impl<'s> Deref for IfcMetricValueSelect<'s> {
    type Target = Select<'s>;

    fn deref(&self) -> &Select<'s> {
        &self.0
    }
}

impl<'s> SelectWrapper<'s> for IfcMetricValueSelect<'s> {
    fn wrap(select: Select<'s>) -> Self {
        IfcMetricValueSelect(select)
    }

    fn select(self: &Self) -> &Select<'s> {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct IfcActorSelect<'s>(pub Select<'s>);

impl<'s> IfcActorSelect<'s> {
    pub const TABLE: SelectTable = SelectTable {
        name: "IfcActorSelect",
        alternatives: &[
            Alternative { name: "IfcOrganization", category: AltCategory::Entity },
            Alternative { name: "IfcPerson", category: AltCategory::Entity },
            Alternative { name: "IfcPersonAndOrganization", category: AltCategory::Entity },
        ],
    };

    pub fn new(store: &'s dyn Store, instance: Instance, attr: &str) -> Self {
        IfcActorSelect(Select::new(store, instance, attr))
    }

    pub fn detached(store: &'s dyn Store, instance: Instance) -> Self {
        IfcActorSelect(Select::detached(store, instance))
    }

    pub fn which(self: &Self) -> Option<&'static Alternative> {
        self.0.which(&Self::TABLE)
    }

    pub fn is_ifc_organization(self: &Self) -> bool {
        self.0.is_entity("IfcOrganization")
    }

    pub fn get_ifc_organization(self: &Self) -> Option<IfcOrganization<'s>> {
        self.0
            .get_entity_instance(Some("IfcOrganization"))
            .map(|instance| IfcOrganization(Entity::new(self.0.store(), instance)))
    }

    pub fn put_ifc_organization(self: &Self, value: impl Into<Instance>) -> Result<(), PutError> {
        self.0.put_entity_instance("IfcOrganization", value.into())
    }

    pub fn is_ifc_person(self: &Self) -> bool {
        self.0.is_entity("IfcPerson")
    }

    pub fn get_ifc_person(self: &Self) -> Option<IfcPerson<'s>> {
        self.0
            .get_entity_instance(Some("IfcPerson"))
            .map(|instance| IfcPerson(Entity::new(self.0.store(), instance)))
    }

    pub fn put_ifc_person(self: &Self, value: impl Into<Instance>) -> Result<(), PutError> {
        self.0.put_entity_instance("IfcPerson", value.into())
    }

    pub fn is_ifc_person_and_organization(self: &Self) -> bool {
        self.0.is_entity("IfcPersonAndOrganization")
    }

    pub fn get_ifc_person_and_organization(self: &Self) -> Option<IfcPersonAndOrganization<'s>> {
        self.0
            .get_entity_instance(Some("IfcPersonAndOrganization"))
            .map(|instance| IfcPersonAndOrganization(Entity::new(self.0.store(), instance)))
    }

    pub fn put_ifc_person_and_organization(self: &Self, value: impl Into<Instance>) -> Result<(), PutError> {
        self.0.put_entity_instance("IfcPersonAndOrganization", value.into())
    }
}

impl<'s> Deref for IfcActorSelect<'s> {
    type Target = Select<'s>;

    fn deref(&self) -> &Select<'s> {
        &self.0
    }
}

impl<'s> SelectWrapper<'s> for IfcActorSelect<'s> {
    fn wrap(select: Select<'s>) -> Self {
        IfcActorSelect(select)
    }

    fn select(self: &Self) -> &Select<'s> {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IfcRoot<'s>(pub Entity<'s>);

impl<'s> IfcRoot<'s> {
    pub const NAME: &'static str = "IfcRoot";

    pub fn create(store: &'s dyn Store) -> Self {
        IfcRoot(Entity::new(store, store.create_instance(Self::NAME)))
    }

    pub fn cast(store: &'s dyn Store, instance: Instance) -> Self {
        IfcRoot(Entity::cast(store, instance, Self::NAME))
    }

    pub fn get_global_id(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("GlobalId", PayloadKind::String)
    }

    pub fn put_global_id(self: &Self, value: &str) {
        self.0.put_text("GlobalId", PayloadKind::String, value)
    }

    pub fn get_name(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("Name", PayloadKind::String)
    }

    pub fn put_name(self: &Self, value: &str) {
        self.0.put_text("Name", PayloadKind::String, value)
    }

    pub fn get_description(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("Description", PayloadKind::String)
    }

    pub fn put_description(self: &Self, value: &str) {
        self.0.put_text("Description", PayloadKind::String, value)
    }
}

impl<'s> Deref for IfcRoot<'s> {
    type Target = Entity<'s>;

    fn deref(&self) -> &Entity<'s> {
        &self.0
    }
}

impl From<IfcRoot<'_>> for Instance {
    fn from(entity: IfcRoot<'_>) -> Self {
        entity.0.instance()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IfcObject<'s>(pub Entity<'s>);

impl<'s> IfcObject<'s> {
    pub const NAME: &'static str = "IfcObject";

    pub fn create(store: &'s dyn Store) -> Self {
        IfcObject(Entity::new(store, store.create_instance(Self::NAME)))
    }

    pub fn cast(store: &'s dyn Store, instance: Instance) -> Self {
        IfcObject(Entity::cast(store, instance, Self::NAME))
    }

    pub fn get_global_id(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("GlobalId", PayloadKind::String)
    }

    pub fn put_global_id(self: &Self, value: &str) {
        self.0.put_text("GlobalId", PayloadKind::String, value)
    }

    pub fn get_name(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("Name", PayloadKind::String)
    }

    pub fn put_name(self: &Self, value: &str) {
        self.0.put_text("Name", PayloadKind::String, value)
    }

    pub fn get_description(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("Description", PayloadKind::String)
    }

    pub fn put_description(self: &Self, value: &str) {
        self.0.put_text("Description", PayloadKind::String, value)
    }

    pub fn get_object_type(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("ObjectType", PayloadKind::String)
    }

    pub fn put_object_type(self: &Self, value: &str) {
        self.0.put_text("ObjectType", PayloadKind::String, value)
    }
}

impl<'s> Deref for IfcObject<'s> {
    type Target = Entity<'s>;

    fn deref(&self) -> &Entity<'s> {
        &self.0
    }
}

impl From<IfcObject<'_>> for Instance {
    fn from(entity: IfcObject<'_>) -> Self {
        entity.0.instance()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IfcProduct<'s>(pub Entity<'s>);

impl<'s> IfcProduct<'s> {
    pub const NAME: &'static str = "IfcProduct";

    pub fn create(store: &'s dyn Store) -> Self {
        IfcProduct(Entity::new(store, store.create_instance(Self::NAME)))
    }

    pub fn cast(store: &'s dyn Store, instance: Instance) -> Self {
        IfcProduct(Entity::cast(store, instance, Self::NAME))
    }

    pub fn get_global_id(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("GlobalId", PayloadKind::String)
    }

    pub fn put_global_id(self: &Self, value: &str) {
        self.0.put_text("GlobalId", PayloadKind::String, value)
    }

    pub fn get_name(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("Name", PayloadKind::String)
    }

    pub fn put_name(self: &Self, value: &str) {
        self.0.put_text("Name", PayloadKind::String, value)
    }

    pub fn get_description(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("Description", PayloadKind::String)
    }

    pub fn put_description(self: &Self, value: &str) {
        self.0.put_text("Description", PayloadKind::String, value)
    }

    pub fn get_object_type(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("ObjectType", PayloadKind::String)
    }

    pub fn put_object_type(self: &Self, value: &str) {
        self.0.put_text("ObjectType", PayloadKind::String, value)
    }
}

impl<'s> Deref for IfcProduct<'s> {
    type Target = Entity<'s>;

    fn deref(&self) -> &Entity<'s> {
        &self.0
    }
}

impl From<IfcProduct<'_>> for Instance {
    fn from(entity: IfcProduct<'_>) -> Self {
        entity.0.instance()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IfcElement<'s>(pub Entity<'s>);

impl<'s> IfcElement<'s> {
    pub const NAME: &'static str = "IfcElement";

    pub fn create(store: &'s dyn Store) -> Self {
        IfcElement(Entity::new(store, store.create_instance(Self::NAME)))
    }

    pub fn cast(store: &'s dyn Store, instance: Instance) -> Self {
        IfcElement(Entity::cast(store, instance, Self::NAME))
    }

    pub fn get_global_id(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("GlobalId", PayloadKind::String)
    }

    pub fn put_global_id(self: &Self, value: &str) {
        self.0.put_text("GlobalId", PayloadKind::String, value)
    }

    pub fn get_name(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("Name", PayloadKind::String)
    }

    pub fn put_name(self: &Self, value: &str) {
        self.0.put_text("Name", PayloadKind::String, value)
    }

    pub fn get_description(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("Description", PayloadKind::String)
    }

    pub fn put_description(self: &Self, value: &str) {
        self.0.put_text("Description", PayloadKind::String, value)
    }

    pub fn get_object_type(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("ObjectType", PayloadKind::String)
    }

    pub fn put_object_type(self: &Self, value: &str) {
        self.0.put_text("ObjectType", PayloadKind::String, value)
    }

    pub fn get_tag(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("Tag", PayloadKind::String)
    }

    pub fn put_tag(self: &Self, value: &str) {
        self.0.put_text("Tag", PayloadKind::String, value)
    }
}

impl<'s> Deref for IfcElement<'s> {
    type Target = Entity<'s>;

    fn deref(&self) -> &Entity<'s> {
        &self.0
    }
}

impl From<IfcElement<'_>> for Instance {
    fn from(entity: IfcElement<'_>) -> Self {
        entity.0.instance()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IfcWall<'s>(pub Entity<'s>);

impl<'s> IfcWall<'s> {
    pub const NAME: &'static str = "IfcWall";

    pub fn create(store: &'s dyn Store) -> Self {
        IfcWall(Entity::new(store, store.create_instance(Self::NAME)))
    }

    pub fn cast(store: &'s dyn Store, instance: Instance) -> Self {
        IfcWall(Entity::cast(store, instance, Self::NAME))
    }

    pub fn get_global_id(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("GlobalId", PayloadKind::String)
    }

    pub fn put_global_id(self: &Self, value: &str) {
        self.0.put_text("GlobalId", PayloadKind::String, value)
    }

    pub fn get_name(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("Name", PayloadKind::String)
    }

    pub fn put_name(self: &Self, value: &str) {
        self.0.put_text("Name", PayloadKind::String, value)
    }

    pub fn get_description(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("Description", PayloadKind::String)
    }

    pub fn put_description(self: &Self, value: &str) {
        self.0.put_text("Description", PayloadKind::String, value)
    }

    pub fn get_object_type(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("ObjectType", PayloadKind::String)
    }

    pub fn put_object_type(self: &Self, value: &str) {
        self.0.put_text("ObjectType", PayloadKind::String, value)
    }

    pub fn get_tag(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("Tag", PayloadKind::String)
    }

    pub fn put_tag(self: &Self, value: &str) {
        self.0.put_text("Tag", PayloadKind::String, value)
    }

    pub fn get_predefined_type(self: &Self) -> Option<IfcWallTypeEnum> {
        self.0.get_enum("PredefinedType")
    }

    pub fn put_predefined_type(self: &Self, value: IfcWallTypeEnum) {
        self.0.put_enum("PredefinedType", value)
    }
}

impl<'s> Deref for IfcWall<'s> {
    type Target = Entity<'s>;

    fn deref(&self) -> &Entity<'s> {
        &self.0
    }
}

impl From<IfcWall<'_>> for Instance {
    fn from(entity: IfcWall<'_>) -> Self {
        entity.0.instance()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IfcSite<'s>(pub Entity<'s>);

impl<'s> IfcSite<'s> {
    pub const NAME: &'static str = "IfcSite";

    pub fn create(store: &'s dyn Store) -> Self {
        IfcSite(Entity::new(store, store.create_instance(Self::NAME)))
    }

    pub fn cast(store: &'s dyn Store, instance: Instance) -> Self {
        IfcSite(Entity::cast(store, instance, Self::NAME))
    }

    pub fn get_global_id(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("GlobalId", PayloadKind::String)
    }

    pub fn put_global_id(self: &Self, value: &str) {
        self.0.put_text("GlobalId", PayloadKind::String, value)
    }

    pub fn get_name(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("Name", PayloadKind::String)
    }

    pub fn put_name(self: &Self, value: &str) {
        self.0.put_text("Name", PayloadKind::String, value)
    }

    pub fn get_description(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("Description", PayloadKind::String)
    }

    pub fn put_description(self: &Self, value: &str) {
        self.0.put_text("Description", PayloadKind::String, value)
    }

    pub fn get_object_type(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("ObjectType", PayloadKind::String)
    }

    pub fn put_object_type(self: &Self, value: &str) {
        self.0.put_text("ObjectType", PayloadKind::String, value)
    }

    pub fn get_ref_latitude(self: &Self) -> Vec<i64> {
        self.0.get_list("RefLatitude", &ScalarMarshaller::<i64>::new())
    }

    pub fn put_ref_latitude(self: &Self, value: &[i64]) {
        self.0.put_list("RefLatitude", &ScalarMarshaller::<i64>::new(), value);
    }

    pub fn get_ref_elevation(self: &Self) -> Option<f64> {
        self.0.get_simple("RefElevation", PayloadKind::Real)
    }

    pub fn put_ref_elevation(self: &Self, value: f64) {
        self.0.put_simple("RefElevation", PayloadKind::Real, value)
    }
}

impl<'s> Deref for IfcSite<'s> {
    type Target = Entity<'s>;

    fn deref(&self) -> &Entity<'s> {
        &self.0
    }
}

impl From<IfcSite<'_>> for Instance {
    fn from(entity: IfcSite<'_>) -> Self {
        entity.0.instance()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IfcActor<'s>(pub Entity<'s>);

impl<'s> IfcActor<'s> {
    pub const NAME: &'static str = "IfcActor";

    pub fn create(store: &'s dyn Store) -> Self {
        IfcActor(Entity::new(store, store.create_instance(Self::NAME)))
    }

    pub fn cast(store: &'s dyn Store, instance: Instance) -> Self {
        IfcActor(Entity::cast(store, instance, Self::NAME))
    }

    pub fn get_global_id(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("GlobalId", PayloadKind::String)
    }

    pub fn put_global_id(self: &Self, value: &str) {
        self.0.put_text("GlobalId", PayloadKind::String, value)
    }

    pub fn get_name(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("Name", PayloadKind::String)
    }

    pub fn put_name(self: &Self, value: &str) {
        self.0.put_text("Name", PayloadKind::String, value)
    }

    pub fn get_description(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("Description", PayloadKind::String)
    }

    pub fn put_description(self: &Self, value: &str) {
        self.0.put_text("Description", PayloadKind::String, value)
    }

    pub fn get_object_type(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("ObjectType", PayloadKind::String)
    }

    pub fn put_object_type(self: &Self, value: &str) {
        self.0.put_text("ObjectType", PayloadKind::String, value)
    }

    pub fn get_the_actor(self: &Self) -> IfcActorSelect<'s> {
        IfcActorSelect(self.0.select("TheActor"))
    }
}

impl<'s> Deref for IfcActor<'s> {
    type Target = Entity<'s>;

    fn deref(&self) -> &Entity<'s> {
        &self.0
    }
}

impl From<IfcActor<'_>> for Instance {
    fn from(entity: IfcActor<'_>) -> Self {
        entity.0.instance()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IfcPerson<'s>(pub Entity<'s>);

impl<'s> IfcPerson<'s> {
    pub const NAME: &'static str = "IfcPerson";

    pub fn create(store: &'s dyn Store) -> Self {
        IfcPerson(Entity::new(store, store.create_instance(Self::NAME)))
    }

    pub fn cast(store: &'s dyn Store, instance: Instance) -> Self {
        IfcPerson(Entity::cast(store, instance, Self::NAME))
    }

    pub fn get_family_name(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("FamilyName", PayloadKind::String)
    }

    pub fn put_family_name(self: &Self, value: &str) {
        self.0.put_text("FamilyName", PayloadKind::String, value)
    }

    pub fn get_given_name(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("GivenName", PayloadKind::String)
    }

    pub fn put_given_name(self: &Self, value: &str) {
        self.0.put_text("GivenName", PayloadKind::String, value)
    }

    pub fn get_middle_names(self: &Self) -> Vec<Rc<str>> {
        self.0.get_list("MiddleNames", &TextMarshaller::new(PayloadKind::String))
    }

    pub fn put_middle_names(self: &Self, value: &[Rc<str>]) {
        self.0.put_list("MiddleNames", &TextMarshaller::new(PayloadKind::String), value);
    }
}

impl<'s> Deref for IfcPerson<'s> {
    type Target = Entity<'s>;

    fn deref(&self) -> &Entity<'s> {
        &self.0
    }
}

impl From<IfcPerson<'_>> for Instance {
    fn from(entity: IfcPerson<'_>) -> Self {
        entity.0.instance()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IfcOrganization<'s>(pub Entity<'s>);

impl<'s> IfcOrganization<'s> {
    pub const NAME: &'static str = "IfcOrganization";

    pub fn create(store: &'s dyn Store) -> Self {
        IfcOrganization(Entity::new(store, store.create_instance(Self::NAME)))
    }

    pub fn cast(store: &'s dyn Store, instance: Instance) -> Self {
        IfcOrganization(Entity::cast(store, instance, Self::NAME))
    }

    pub fn get_name(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("Name", PayloadKind::String)
    }

    pub fn put_name(self: &Self, value: &str) {
        self.0.put_text("Name", PayloadKind::String, value)
    }
}

impl<'s> Deref for IfcOrganization<'s> {
    type Target = Entity<'s>;

    fn deref(&self) -> &Entity<'s> {
        &self.0
    }
}

impl From<IfcOrganization<'_>> for Instance {
    fn from(entity: IfcOrganization<'_>) -> Self {
        entity.0.instance()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IfcPersonAndOrganization<'s>(pub Entity<'s>);

impl<'s> IfcPersonAndOrganization<'s> {
    pub const NAME: &'static str = "IfcPersonAndOrganization";

    pub fn create(store: &'s dyn Store) -> Self {
        IfcPersonAndOrganization(Entity::new(store, store.create_instance(Self::NAME)))
    }

    pub fn cast(store: &'s dyn Store, instance: Instance) -> Self {
        IfcPersonAndOrganization(Entity::cast(store, instance, Self::NAME))
    }

    pub fn get_the_person(self: &Self) -> Option<IfcPerson<'s>> {
        self.0
            .get_instance("ThePerson", Some(IfcPerson::NAME))
            .map(|instance| IfcPerson(Entity::new(self.0.store(), instance)))
    }

    pub fn put_the_person(self: &Self, value: impl Into<Instance>) -> Result<(), PutError> {
        self.0.put_instance("ThePerson", IfcPerson::NAME, value.into())
    }

    pub fn get_the_organization(self: &Self) -> Option<IfcOrganization<'s>> {
        self.0
            .get_instance("TheOrganization", Some(IfcOrganization::NAME))
            .map(|instance| IfcOrganization(Entity::new(self.0.store(), instance)))
    }

    pub fn put_the_organization(self: &Self, value: impl Into<Instance>) -> Result<(), PutError> {
        self.0.put_instance("TheOrganization", IfcOrganization::NAME, value.into())
    }
}

impl<'s> Deref for IfcPersonAndOrganization<'s> {
    type Target = Entity<'s>;

    fn deref(&self) -> &Entity<'s> {
        &self.0
    }
}

impl From<IfcPersonAndOrganization<'_>> for Instance {
    fn from(entity: IfcPersonAndOrganization<'_>) -> Self {
        entity.0.instance()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IfcPropertySingleValue<'s>(pub Entity<'s>);

impl<'s> IfcPropertySingleValue<'s> {
    pub const NAME: &'static str = "IfcPropertySingleValue";

    pub fn create(store: &'s dyn Store) -> Self {
        IfcPropertySingleValue(Entity::new(store, store.create_instance(Self::NAME)))
    }

    pub fn cast(store: &'s dyn Store, instance: Instance) -> Self {
        IfcPropertySingleValue(Entity::cast(store, instance, Self::NAME))
    }

    pub fn get_name(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("Name", PayloadKind::String)
    }

    pub fn put_name(self: &Self, value: &str) {
        self.0.put_text("Name", PayloadKind::String, value)
    }

    pub fn get_nominal_value(self: &Self) -> IfcValue<'s> {
        IfcValue(self.0.select("NominalValue"))
    }
}

impl<'s> Deref for IfcPropertySingleValue<'s> {
    type Target = Entity<'s>;

    fn deref(&self) -> &Entity<'s> {
        &self.0
    }
}

impl From<IfcPropertySingleValue<'_>> for Instance {
    fn from(entity: IfcPropertySingleValue<'_>) -> Self {
        entity.0.instance()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IfcPropertyListValue<'s>(pub Entity<'s>);

impl<'s> IfcPropertyListValue<'s> {
    pub const NAME: &'static str = "IfcPropertyListValue";

    pub fn create(store: &'s dyn Store) -> Self {
        IfcPropertyListValue(Entity::new(store, store.create_instance(Self::NAME)))
    }

    pub fn cast(store: &'s dyn Store, instance: Instance) -> Self {
        IfcPropertyListValue(Entity::cast(store, instance, Self::NAME))
    }

    pub fn get_name(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("Name", PayloadKind::String)
    }

    pub fn put_name(self: &Self, value: &str) {
        self.0.put_text("Name", PayloadKind::String, value)
    }

    pub fn get_list_values(self: &Self) -> Vec<IfcValue<'s>> {
        self.0.get_list("ListValues", &SelectMarshaller::<IfcValue<'s>>::new())
    }

    pub fn put_list_values(self: &Self, value: &[IfcValue<'s>]) {
        self.0.put_list("ListValues", &SelectMarshaller::<IfcValue<'s>>::new(), value);
    }
}

impl<'s> Deref for IfcPropertyListValue<'s> {
    type Target = Entity<'s>;

    fn deref(&self) -> &Entity<'s> {
        &self.0
    }
}

impl From<IfcPropertyListValue<'_>> for Instance {
    fn from(entity: IfcPropertyListValue<'_>) -> Self {
        entity.0.instance()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IfcMetric<'s>(pub Entity<'s>);

impl<'s> IfcMetric<'s> {
    pub const NAME: &'static str = "IfcMetric";

    pub fn create(store: &'s dyn Store) -> Self {
        IfcMetric(Entity::new(store, store.create_instance(Self::NAME)))
    }

    pub fn cast(store: &'s dyn Store, instance: Instance) -> Self {
        IfcMetric(Entity::cast(store, instance, Self::NAME))
    }

    pub fn get_data_value(self: &Self) -> IfcMetricValueSelect<'s> {
        IfcMetricValueSelect(self.0.select("DataValue"))
    }
}

impl<'s> Deref for IfcMetric<'s> {
    type Target = Entity<'s>;

    fn deref(&self) -> &Entity<'s> {
        &self.0
    }
}

impl From<IfcMetric<'_>> for Instance {
    fn from(entity: IfcMetric<'_>) -> Self {
        entity.0.instance()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IfcTable<'s>(pub Entity<'s>);

impl<'s> IfcTable<'s> {
    pub const NAME: &'static str = "IfcTable";

    pub fn create(store: &'s dyn Store) -> Self {
        IfcTable(Entity::new(store, store.create_instance(Self::NAME)))
    }

    pub fn cast(store: &'s dyn Store, instance: Instance) -> Self {
        IfcTable(Entity::cast(store, instance, Self::NAME))
    }

    pub fn get_name(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("Name", PayloadKind::String)
    }

    pub fn put_name(self: &Self, value: &str) {
        self.0.put_text("Name", PayloadKind::String, value)
    }
}

impl<'s> Deref for IfcTable<'s> {
    type Target = Entity<'s>;

    fn deref(&self) -> &Entity<'s> {
        &self.0
    }
}

impl From<IfcTable<'_>> for Instance {
    fn from(entity: IfcTable<'_>) -> Self {
        entity.0.instance()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IfcCartesianPointList3D<'s>(pub Entity<'s>);

impl<'s> IfcCartesianPointList3D<'s> {
    pub const NAME: &'static str = "IfcCartesianPointList3D";

    pub fn create(store: &'s dyn Store) -> Self {
        IfcCartesianPointList3D(Entity::new(store, store.create_instance(Self::NAME)))
    }

    pub fn cast(store: &'s dyn Store, instance: Instance) -> Self {
        IfcCartesianPointList3D(Entity::cast(store, instance, Self::NAME))
    }

    pub fn get_coord_list(self: &Self) -> Vec<Vec<f64>> {
        self.0.get_list("CoordList", &NestedMarshaller::new(ScalarMarshaller::<f64>::new()))
    }

    pub fn put_coord_list(self: &Self, value: &[Vec<f64>]) {
        self.0.put_list("CoordList", &NestedMarshaller::new(ScalarMarshaller::<f64>::new()), value);
    }
}

impl<'s> Deref for IfcCartesianPointList3D<'s> {
    type Target = Entity<'s>;

    fn deref(&self) -> &Entity<'s> {
        &self.0
    }
}

impl From<IfcCartesianPointList3D<'_>> for Instance {
    fn from(entity: IfcCartesianPointList3D<'_>) -> Self {
        entity.0.instance()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IfcRelAggregates<'s>(pub Entity<'s>);

impl<'s> IfcRelAggregates<'s> {
    pub const NAME: &'static str = "IfcRelAggregates";

    pub fn create(store: &'s dyn Store) -> Self {
        IfcRelAggregates(Entity::new(store, store.create_instance(Self::NAME)))
    }

    pub fn cast(store: &'s dyn Store, instance: Instance) -> Self {
        IfcRelAggregates(Entity::cast(store, instance, Self::NAME))
    }

    pub fn get_global_id(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("GlobalId", PayloadKind::String)
    }

    pub fn put_global_id(self: &Self, value: &str) {
        self.0.put_text("GlobalId", PayloadKind::String, value)
    }

    pub fn get_name(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("Name", PayloadKind::String)
    }

    pub fn put_name(self: &Self, value: &str) {
        self.0.put_text("Name", PayloadKind::String, value)
    }

    pub fn get_description(self: &Self) -> Option<Rc<str>> {
        self.0.get_text("Description", PayloadKind::String)
    }

    pub fn put_description(self: &Self, value: &str) {
        self.0.put_text("Description", PayloadKind::String, value)
    }

    pub fn get_relating_object(self: &Self) -> Option<IfcObject<'s>> {
        self.0
            .get_instance("RelatingObject", Some(IfcObject::NAME))
            .map(|instance| IfcObject(Entity::new(self.0.store(), instance)))
    }

    pub fn put_relating_object(self: &Self, value: impl Into<Instance>) -> Result<(), PutError> {
        self.0.put_instance("RelatingObject", IfcObject::NAME, value.into())
    }

    pub fn get_related_objects(self: &Self) -> Vec<Instance> {
        self.0.get_list("RelatedObjects", &InstanceMarshaller::new(Some("IfcObject")))
    }

    pub fn put_related_objects(self: &Self, value: &[Instance]) {
        self.0.put_list("RelatedObjects", &InstanceMarshaller::new(Some("IfcObject")), value);
    }
}

impl<'s> Deref for IfcRelAggregates<'s> {
    type Target = Entity<'s>;

    fn deref(&self) -> &Entity<'s> {
        &self.0
    }
}

impl From<IfcRelAggregates<'_>> for Instance {
    fn from(entity: IfcRelAggregates<'_>) -> Self {
        entity.0.instance()
    }
}
