//! Report Renderer
//!
//! Pure transformation from a `FormState` snapshot to the BOPM document
//! text. No reactive state in here; the store calls `render` on demand.

use crate::models::{CrewMember, FormState, SeizedItem, SupportEntry};

/// Fallback emitted for any slot whose trimmed value is empty
pub const NO_CHANGE: &str = "Sem Alteração.";

/// Area designation, fixed for this unit
const AREA: &str = "CPA/M-8";

/// Trimmed value, or the fallback when nothing is left
fn or_no_change(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        NO_CHANGE
    } else {
        trimmed
    }
}

/// `"{rank} {name}"` with the name trimmed, or the fallback when unnamed
fn crew_line(member: &CrewMember) -> String {
    let name = member.name.trim();
    if name.is_empty() {
        NO_CHANGE.to_string()
    } else {
        format!("{} {}", member.rank, name)
    }
}

/// Support entries, one per line in insertion order, blanks dropped
fn support_section(entries: &[SupportEntry]) -> String {
    let lines: Vec<&str> = entries
        .iter()
        .map(|entry| entry.text.trim())
        .filter(|text| !text.is_empty())
        .collect();
    if lines.is_empty() {
        NO_CHANGE.to_string()
    } else {
        lines.join("\n")
    }
}

/// Seized items as `"{quantity}x {description}"` lines in insertion order.
/// Rows missing either sub-field after trimming are left out.
fn seized_section(items: &[SeizedItem]) -> String {
    let lines: Vec<String> = items
        .iter()
        .filter(|item| !item.quantity.trim().is_empty() && !item.description.trim().is_empty())
        .map(|item| format!("{}x {}", item.quantity.trim(), item.description.trim()))
        .collect();
    if lines.is_empty() {
        NO_CHANGE.to_string()
    } else {
        lines.join("\n")
    }
}

/// Render the full document.
///
/// Header values (number, date, time, prefix) pass through verbatim; every
/// other slot goes through the trimmed-or-fallback rule. Section headers
/// and blank-line spacing are part of the copy-paste contract.
pub fn render(form: &FormState) -> String {
    format!(
        "BOPM nº {number}

DATA: {date}
HORÁRIO: {time}

PREFIXO: {prefix}

ENCARREGADO: {lead}
MOTORISTA: {driver}
TERCEIRO HOMEM: {third}
QUARTO HOMEM: {fourth}

SUPERVISOR PRESENTE NA OCORRÊNCIA:
{supervisor}

ÁREA: {area}

APRESENTAÇÃO DOS FATOS:
{presentation}

DELEGADO DE PLANTÃO:
{duty_officer}

LOCAL:
{location}

APOIOS:
{support}

NATUREZA DOS FATOS:
{nature}

DESCRIÇÃO DOS FATOS:
{description}

MATERIAL APREENDIDO:
{seized}",
        number = form.number,
        date = form.date,
        time = form.time,
        prefix = form.prefix,
        lead = crew_line(&form.lead),
        driver = crew_line(&form.driver),
        third = crew_line(&form.third),
        fourth = crew_line(&form.fourth),
        supervisor = or_no_change(&form.supervisor),
        area = AREA,
        presentation = or_no_change(&form.presentation),
        duty_officer = or_no_change(&form.duty_officer),
        location = or_no_change(&form.location),
        support = support_section(&form.support),
        nature = or_no_change(&form.nature),
        description = or_no_change(&form.description),
        seized = seized_section(&form.seized),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeizedField;

    fn blank_form() -> FormState {
        let mut form = FormState::new();
        form.date = String::new();
        form
    }

    #[test]
    fn test_empty_form_renders_fallback_everywhere() {
        let text = render(&blank_form());
        // 4 crew slots + 8 sections
        assert_eq!(text.matches(NO_CHANGE).count(), 12);
        assert!(text.contains("ÁREA: CPA/M-8"));
    }

    #[test]
    fn test_render_is_pure() {
        let mut form = FormState::new();
        form.number = "77".to_string();
        form.add_support_entry();
        form.update_support_entry(1, "bloqueio".to_string());
        assert_eq!(render(&form), render(&form));
    }

    #[test]
    fn test_scalar_slots_trim_or_fall_back() {
        let mut form = blank_form();
        form.supervisor = "  Sgt Lima  ".to_string();
        form.nature = "   ".to_string();

        let text = render(&form);
        assert!(text.contains("SUPERVISOR PRESENTE NA OCORRÊNCIA:\nSgt Lima\n"));
        assert!(text.contains("NATUREZA DOS FATOS:\nSem Alteração.\n"));
    }

    #[test]
    fn test_crew_line_formats_rank_and_trimmed_name() {
        let mut form = blank_form();
        form.lead.name = "  Silva ".to_string();

        let text = render(&form);
        assert!(text.contains(&format!("ENCARREGADO: {} Silva\n", form.lead.rank)));
        assert!(text.contains("MOTORISTA: Sem Alteração.\n"));
    }

    #[test]
    fn test_support_entries_are_trimmed_and_blanks_dropped() {
        let mut form = blank_form();
        form.add_support_entry();
        form.add_support_entry();
        form.add_support_entry();
        form.update_support_entry(1, "  reforço da 3ª Cia  ".to_string());
        form.update_support_entry(2, "   ".to_string());
        form.update_support_entry(3, "apoio aéreo".to_string());

        let text = render(&form);
        assert!(text.contains("APOIOS:\nreforço da 3ª Cia\napoio aéreo\n"));
    }

    #[test]
    fn test_partial_seized_items_are_dropped_but_kept_in_form() {
        let mut form = blank_form();
        form.add_seized_item();
        form.add_seized_item();
        form.update_seized_item(1, SeizedField::Quantity, "2".to_string());
        form.update_seized_item(1, SeizedField::Description, "celulares".to_string());
        form.update_seized_item(2, SeizedField::Description, "notebook".to_string());

        let text = render(&form);
        assert!(text.ends_with("MATERIAL APREENDIDO:\n2x celulares"));
        assert_eq!(form.seized.len(), 2);
    }

    #[test]
    fn test_seized_lines_trim_both_fields() {
        let mut form = blank_form();
        form.add_seized_item();
        form.update_seized_item(1, SeizedField::Quantity, " 1 ".to_string());
        form.update_seized_item(1, SeizedField::Description, " pistola ".to_string());

        let text = render(&form);
        assert!(text.ends_with("MATERIAL APREENDIDO:\n1x pistola"));
    }

    #[test]
    fn test_full_document_layout() {
        let mut form = blank_form();
        form.number = "1234".to_string();
        form.date = "05/08/2026".to_string();
        form.time = "14h30".to_string();
        form.prefix = "E-M09030".to_string();
        form.lead = CrewMember {
            rank: "Cabo PM".to_string(),
            name: "Silva".to_string(),
        };
        form.supervisor = "Sgt Lima".to_string();
        form.location = "Av. Central, 100".to_string();
        form.duty_officer = "Dr. Costa".to_string();
        form.nature = "Roubo".to_string();
        form.presentation = "Equipe acionada via COPOM.".to_string();
        form.description = "Abordagem no local indicado.".to_string();
        form.add_support_entry();
        form.update_support_entry(1, "reforço da 3ª Cia".to_string());
        form.add_seized_item();
        form.update_seized_item(2, SeizedField::Quantity, "2".to_string());
        form.update_seized_item(2, SeizedField::Description, "celulares".to_string());

        let expected = concat!(
            "BOPM nº 1234\n",
            "\n",
            "DATA: 05/08/2026\n",
            "HORÁRIO: 14h30\n",
            "\n",
            "PREFIXO: E-M09030\n",
            "\n",
            "ENCARREGADO: Cabo PM Silva\n",
            "MOTORISTA: Sem Alteração.\n",
            "TERCEIRO HOMEM: Sem Alteração.\n",
            "QUARTO HOMEM: Sem Alteração.\n",
            "\n",
            "SUPERVISOR PRESENTE NA OCORRÊNCIA:\n",
            "Sgt Lima\n",
            "\n",
            "ÁREA: CPA/M-8\n",
            "\n",
            "APRESENTAÇÃO DOS FATOS:\n",
            "Equipe acionada via COPOM.\n",
            "\n",
            "DELEGADO DE PLANTÃO:\n",
            "Dr. Costa\n",
            "\n",
            "LOCAL:\n",
            "Av. Central, 100\n",
            "\n",
            "APOIOS:\n",
            "reforço da 3ª Cia\n",
            "\n",
            "NATUREZA DOS FATOS:\n",
            "Roubo\n",
            "\n",
            "DESCRIÇÃO DOS FATOS:\n",
            "Abordagem no local indicado.\n",
            "\n",
            "MATERIAL APREENDIDO:\n",
            "2x celulares",
        );
        assert_eq!(render(&form), expected);
    }
}
