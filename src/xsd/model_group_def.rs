use roxmltree::Node;

use super::model_group::ModelGroup;
use super::xstypes::NCName;
use crate::error::Error;

/// Schema Component: Model Group Definition (§3.7), a named top-level
/// `<xs:group>`.
#[derive(Clone, Debug)]
pub struct ModelGroupDefinition {
    pub name: NCName,
    pub model_group: ModelGroup,
}

impl ModelGroupDefinition {
    pub const TAG_NAME: &'static str = "group";

    pub fn map_from_xml(group: Node) -> Result<Self, Error> {
        let name = group
            .attribute("name")
            .ok_or_else(|| Error::SchemaParse("top-level group without a name".into()))?
            .to_string();

        let model_group = group
            .children()
            .find(|c| matches!(c.tag_name().name(), "all" | "choice" | "sequence"))
            .map(ModelGroup::map_from_xml)
            .transpose()?
            .ok_or_else(|| {
                Error::SchemaParse(format!("group {name:?} has no model group child"))
            })?;

        Ok(Self { name, model_group })
    }
}
