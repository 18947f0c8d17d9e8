// src/noyau/curseur.rs
//
// Curseur de lecture : texte source + position courante.
// - Une instance par évaluation (jamais partagée, jamais globale).
// - La position ne recule jamais.
// - Toute la grammaire est ASCII : on avance octet par octet, donc la position
//   reste toujours sur une frontière de caractère.

/// Blanc au sens de `isspace` en locale "C" (inclut la tabulation verticale,
/// que `u8::is_ascii_whitespace` ignore).
fn est_blanc(c: u8) -> bool {
    c.is_ascii_whitespace() || c == 0x0B
}

#[derive(Clone, Debug)]
pub struct Curseur<'a> {
    texte: &'a str,
    pos: usize,
}

impl<'a> Curseur<'a> {
    pub fn new(texte: &'a str) -> Self {
        Self { texte, pos: 0 }
    }

    /// Position interne (octets) : sert à délimiter un lexème.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn fini(&self) -> bool {
        self.pos >= self.texte.len()
    }

    /// Octet sous le curseur (None en fin de texte).
    pub fn courant(&self) -> Option<u8> {
        self.texte.as_bytes().get(self.pos).copied()
    }

    /// Avance d’un octet. À n’appeler que sur un octet ASCII déjà inspecté.
    pub fn avancer(&mut self) {
        if !self.fini() {
            self.pos += 1;
        }
    }

    pub fn sauter_blancs(&mut self) {
        while matches!(self.courant(), Some(c) if est_blanc(c)) {
            self.pos += 1;
        }
    }

    /// Primitive unique de la grammaire :
    /// saute les blancs, puis consomme `attendu` s’il est sous le curseur.
    /// En cas d’échec, seuls les blancs ont été consommés.
    pub fn accepte(&mut self, attendu: u8) -> bool {
        self.sauter_blancs();
        if self.courant() == Some(attendu) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Tranche du texte entre `debut` (octets) et la position courante.
    pub fn tranche(&self, debut: usize) -> &'a str {
        self.texte.get(debut..self.pos).unwrap_or("")
    }

    /// Position en caractères (0-based) : c’est elle qu’on montre à l’utilisateur.
    pub fn position(&self) -> usize {
        self.position_de(self.pos)
    }

    /// Convertit une position en octets en position en caractères.
    pub fn position_de(&self, pos: usize) -> usize {
        self.texte
            .get(..pos)
            .map_or(pos, |avant| avant.chars().count())
    }

    /// Caractère complet sous le curseur (peut être non ASCII).
    pub fn caractere(&self) -> Option<char> {
        self.texte.get(self.pos..).and_then(|reste| reste.chars().next())
    }
}
