use crate::application::read_models::{CharacterReadModel, CoreView};
use crate::character_lookup::domain::{DerivedTag, SkillSet};
use crate::ports::outbound::CharacterFormatter;
use crate::shared::Result;

/// Placeholder for a missing guild or an empty preset slot
const MISSING: &str = "X";

/// MarkdownFormatter adapter rendering the character as Markdown panels
///
/// Sections follow the order of the lookup page: tags, basic info,
/// equipment, stats, skills, V matrix and pets. Optional sections
/// (stolen skills, stella memorize, each matrix bucket) are omitted when empty.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    fn tag(tag: &DerivedTag) -> String {
        format!("`{}`", tag.label)
    }

    /// `2023-12-14T08:28:35Z` → `2023-12-14`
    fn format_date(timestamp: &str) -> &str {
        timestamp.split('T').next().unwrap_or(timestamp)
    }

    /// `2024-03-01T21:05:11Z` → `2024-03-01 21:05`
    fn format_datetime(timestamp: &str) -> String {
        match timestamp.split_once('T') {
            Some((date, time)) => format!("{} {}", date, time.get(..5).unwrap_or(time)),
            None => timestamp.to_string(),
        }
    }

    /// Inserts thousands separators into integral values, keeping any fraction.
    /// Non-numeric values are returned unchanged.
    fn format_stat_value(value: &str) -> String {
        let (integral, fraction) = match value.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (value, None),
        };
        let (sign, digits) = match integral.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", integral),
        };

        let numeric = !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && fraction.map_or(true, |f| !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()));
        if !numeric {
            return value.to_string();
        }

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        match fraction {
            Some(f) => format!("{}{}.{}", sign, grouped, f),
            None => format!("{}{}", sign, grouped),
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &CharacterReadModel) {
        match &model.character.basic_info {
            Some(info) => output.push_str(&format!("# {}님 캐릭터 정보\n\n", info.character_name)),
            None => output.push_str("# 캐릭터 정보\n\n"),
        }

        let tags: Vec<String> = model.equipment_tags.iter().map(Self::tag).collect();
        if !tags.is_empty() {
            output.push_str(&tags.join(" "));
            output.push_str("\n\n");
        }
    }

    fn render_basic_info(&self, output: &mut String, model: &CharacterReadModel) {
        let Some(info) = &model.character.basic_info else {
            return;
        };
        let guild = if model.character.guild_name.is_empty() {
            MISSING
        } else {
            model.character.guild_name.as_str()
        };

        output.push_str("## 기본 정보\n\n");
        output.push_str(&format!("- 닉네임: {}\n", info.character_name));
        output.push_str(&format!("- 월드: {}\n", info.world_name));
        output.push_str(&format!("- 직업: {}\n", info.character_job_name));
        output.push_str(&format!("- 레벨: {}\n", info.character_level));
        output.push_str(&format!("- 길드: {}\n", guild));
        output.push_str(&format!(
            "- 생년월일: {}\n",
            Self::format_date(&info.character_date_create)
        ));
        if let Some(last_login) = &info.character_date_last_login {
            output.push_str(&format!(
                "- 최근 접속: {}\n",
                Self::format_datetime(last_login)
            ));
        }
        output.push('\n');
    }

    fn render_equipment(&self, output: &mut String, model: &CharacterReadModel) {
        output.push_str("## 장비 정보\n\n");
        if model.display_equipment.is_empty() {
            output.push_str("*장착한 장비가 없습니다*\n\n");
            return;
        }
        for item in &model.display_equipment {
            output.push_str(&format!(
                "- {}: {}\n",
                item.item_equipment_slot_name, item.item_name
            ));
        }
        output.push('\n');
    }

    fn render_stats(&self, output: &mut String, model: &CharacterReadModel) {
        output.push_str("## 스탯 정보\n\n");
        for stat in &model.character.stat {
            output.push_str(&format!(
                "- {}: {}\n",
                stat.stat_name,
                Self::format_stat_value(&stat.stat_value)
            ));
        }
        output.push('\n');
    }

    fn render_skills(&self, output: &mut String, model: &CharacterReadModel) {
        output.push_str("## 스킬 정보\n\n");

        let Some(skills) = model
            .character
            .skill_info
            .as_ref()
            .and_then(|info| info.skill.as_ref())
        else {
            output.push_str("*스킬 정보가 없습니다*\n\n");
            return;
        };

        self.render_presets(output, skills);

        if !skills.steal_skill.is_empty() {
            output.push_str("### 훔친 스킬\n\n");
            for steal in &skills.steal_skill {
                output.push_str(&format!("- {}\n", steal.skill_name));
            }
            output.push('\n');
        }

        if !skills.stella_memorize.is_empty() {
            output.push_str("### 스텔라 메모라이즈\n\n");
            for stella in &skills.stella_memorize {
                output.push_str(&format!("- {}\n", stella.skill_name));
            }
            output.push('\n');
        }
    }

    fn render_presets(&self, output: &mut String, skills: &SkillSet) {
        output.push_str("### 스킬 프리셋\n\n");
        for preset in &skills.preset {
            let names: Vec<&str> = preset
                .skill_names()
                .into_iter()
                .map(|name| name.filter(|n| !n.is_empty()).unwrap_or(MISSING))
                .collect();
            output.push_str(&format!(
                "- {}번 프리셋: {}\n",
                preset.preset_slot_no,
                names.join(" / ")
            ));
        }
        output.push('\n');
    }

    fn render_matrix(&self, output: &mut String, model: &CharacterReadModel) {
        output.push_str("## V 매트릭스 정보\n\n");
        let matrix = &model.matrix;
        self.render_cores(output, "5차 스킬", &matrix.skill);
        self.render_cores(output, "강화 스킬", &matrix.enhancement);
        self.render_cores(output, "특수 스킬", &matrix.special);
    }

    fn render_cores(&self, output: &mut String, title: &str, cores: &[CoreView]) {
        if cores.is_empty() {
            return;
        }
        output.push_str(&format!("### {}\n\n", title));
        for core in cores {
            output.push_str(&format!("- {}", core.label));
            if let Some(badge) = &core.slot_badge {
                output.push_str(&format!(" {}", Self::tag(badge)));
            }
            output.push('\n');
            if !core.sub_skills.is_empty() {
                output.push_str(&format!("  ({})\n", core.sub_skills.join("+")));
            }
        }
        output.push('\n');
    }

    fn render_pets(&self, output: &mut String, model: &CharacterReadModel) {
        output.push_str("## 펫 정보\n\n");
        let Some(pets) = &model.character.pet_info else {
            return;
        };

        for slot in pets.slots() {
            let (Some(name), Some(_)) = (slot.name, slot.date_expire) else {
                continue;
            };
            match model.pet_urgency_for(slot.slot) {
                Some(urgency) => {
                    output.push_str(&format!("- {} {}\n", name, Self::tag(&urgency.tag)))
                }
                None => output.push_str(&format!("- {}\n", name)),
            }
        }
        output.push('\n');
    }

    fn render_footer(&self, output: &mut String, model: &CharacterReadModel) {
        output.push_str("---\n\n");
        output.push_str(&format!("공유 링크: `?{}`\n\n", model.share_query));
        output.push_str("Data Provided By NEXON\n");
    }
}

impl CharacterFormatter for MarkdownFormatter {
    fn format(&self, model: &CharacterReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model);
        self.render_basic_info(&mut output, model);
        self.render_equipment(&mut output, model);
        self.render_stats(&mut output, model);
        self.render_skills(&mut output, model);
        self.render_matrix(&mut output, model);
        self.render_pets(&mut output, model);
        self.render_footer(&mut output, model);

        Ok(output)
    }
}
