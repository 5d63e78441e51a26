//! Maintainer notification drafts.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Body sent to every maintainer. `{distgits}` receives the comma-joined list.
const BODY_TEMPLATE: &str = "
Dear Maintainer,

You have received this email because you are one of the maintainers of
the following distgit(s).

{distgits}

As stated in a recent email to the Fedora Devel list [1], the distgit(s)
above have been added to the Fedora Zuul CI configuration.

tl;dr: Zuul runs generic CI jobs for any Pull-Request open or updated.
Please see [2] for more informations.

If you prefer we revert that Zuul setting for your distgit(s), please let us
know by a reply to this email or open a PR to remove the distgit(s) from the
configuration file [3]. We apologize for the inconvenience.

[1]: https://lists.fedoraproject.org/archives/list/devel@lists.fedoraproject.org/thread/SUK6OXWP5HJXEMLSOXLCHN4JNADRK2FN/
[2]: https://fedoraproject.org/wiki/Zuul-based-ci
[3]: https://pagure.io/fedora-project-config/blob/master/f/resources/fedora-distgits.yaml
";

/// A rendered email ready to be spooled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailDraft {
    #[serde(rename = "to")]
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Renders drafts with a fixed subject and recipient domain.
#[derive(Debug, Clone)]
pub struct EmailRenderer {
    domain: String,
    subject: String,
}

impl EmailRenderer {
    pub fn new(domain: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            subject: subject.into(),
        }
    }

    /// Render the draft for one maintainer. Distgits are listed in sorted order.
    pub fn render(&self, maintainer: &str, distgits: &BTreeSet<String>) -> EmailDraft {
        let listed = distgits
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        EmailDraft {
            recipient: format!("{}@{}", maintainer, self.domain),
            subject: self.subject.clone(),
            body: BODY_TEMPLATE.replace("{distgits}", &listed),
        }
    }
}
