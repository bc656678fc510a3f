//! Builds the deck from the static content tables and the live text config.

use crate::domain::entities::{
    Card, CardLine, ContentBlock, Deck, DeckConfig, Kpi, LabeledText, Slide,
};

use super::content::{
    CHALLENGE_DRIVE_URL, EVALUATION_CRITERIA, FUNDAMENTALS_CARDS, FundamentalsCard,
    MINI_CONSULTANCY_VIDEO_URL, PLATFORMS, SUMMARY_STEPS, TAGLINE, TEAM_MEMBERS,
    WORKFLOW_STAGES, WorkflowCardBody, WorkflowStage,
};

/// Builds the deck for `config`.
///
/// Only text depends on `config`; the number of slides and the staged item
/// count of each slide are fixed, so reveal state stays valid across rebuilds.
#[must_use]
pub fn build_deck(config: &DeckConfig) -> Deck {
    let mut slides = vec![
        about_slide(),
        course_title_slide(config),
        team_slide(),
        fundamentals_slide(),
        mini_consultancy_slide(),
        summary_slide(),
    ];
    slides.extend(WORKFLOW_STAGES.iter().map(workflow_slide));
    slides.extend([
        challenge_slide(),
        evaluation_slide(),
        platforms_slide(),
        closing_slide(),
    ]);

    Deck::new(slides)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn bullets(items: &[&str]) -> Vec<CardLine> {
    items.iter().map(|b| CardLine::Bullet((*b).to_string())).collect()
}

fn about_slide() -> Slide {
    Slide::new(vec![
        ContentBlock::Image {
            path: "foto_curso.png".to_string(),
            alt: "Equipe Crescer planejando soluções estratégicas".to_string(),
        },
        ContentBlock::Heading("Propósito".to_string()),
        ContentBlock::Paragraph(
            "Fundada em 2021, a Crescer nasceu com um propósito claro: ajudar empresas a prosperar por meio de soluções inteligentes e resultados consistentes.".to_string(),
        ),
        ContentBlock::Paragraph(
            "Acreditamos que confiança é o maior ativo de um negócio, e ela se constrói entregando resultados reais e estando perto de cada cliente em toda a jornada.".to_string(),
        ),
        ContentBlock::Paragraph(
            "Nossa evolução para a tecnologia foi natural. Os desafios de gestão e processos pediram ferramentas integradas e inteligentes, e nós respondemos unindo a visão estratégica da consultoria à força da inteligência artificial.".to_string(),
        ),
        ContentBlock::Paragraph(
            "Hoje, queremos ser a parceira de negócios mais confiável de Montes Claros, transformando desafios em eficiência e planos em resultados reais.".to_string(),
        ),
        ContentBlock::Callout("Consultoria inteligente. Resultados reais.".to_string()),
    ])
    .title("Quem Somos")
}

fn course_title_slide(config: &DeckConfig) -> Slide {
    Slide::new(vec![
        ContentBlock::Image {
            path: "logo_crescer.jpg".to_string(),
            alt: "Crescer Instituto de Negócios".to_string(),
        },
        ContentBlock::Paragraph(config.instructor_name.clone()),
    ])
    .title(config.course_title.clone())
    .subtitle("Transformando dados em decisões estratégicas")
    .centered()
}

fn team_slide() -> Slide {
    let cards = TEAM_MEMBERS
        .iter()
        .map(|member| {
            let mut role = member.role_line1.to_string();
            if let Some(second) = member.role_line2.filter(|r| !r.is_empty()) {
                role.push_str(" · ");
                role.push_str(second);
            }

            let portrait = member.image.map_or_else(
                || format!("[{}]", member.name.chars().next().unwrap_or('?')),
                |image| format!("[{image}]"),
            );

            ContentBlock::Card(Card::new(
                member.name,
                vec![
                    CardLine::Labeled(LabeledText::new(portrait, role)),
                    CardLine::Text(member.summary.unwrap_or(member.description).to_string()),
                ],
            ))
        })
        .collect();

    Slide::new(cards)
        .title("Nossa Equipe")
        .subtitle(
            "Conheça os especialistas que combinam consultoria estratégica e tecnologia personalizada",
        )
}

fn fundamentals_card(slot: usize, card: &FundamentalsCard) -> ContentBlock {
    let mut lines = bullets(card.bullets);
    if let Some((icon, text)) = card.footer {
        lines.push(CardLine::Labeled(LabeledText::new(icon, text)));
    }
    ContentBlock::Card(Card::new(card.title, lines).staged(slot))
}

fn fundamentals_slide() -> Slide {
    Slide::new(
        FUNDAMENTALS_CARDS
            .iter()
            .enumerate()
            .map(|(slot, card)| fundamentals_card(slot, card))
            .collect(),
    )
    .title("🎯 Fundamentos da Consultoria com IA")
}

fn mini_consultancy_slide() -> Slide {
    Slide::new(vec![
        ContentBlock::Card(Card::new(
            "Caso prático",
            vec![CardLine::Text(
                "Empresa com queda de vendas e aumento de custos".to_string(),
            )],
        )),
        ContentBlock::QrCode {
            url: MINI_CONSULTANCY_VIDEO_URL.to_string(),
            caption:
                "Assista: como configuramos a jornada consultiva com IA em poucos minutos."
                    .to_string(),
        },
        ContentBlock::LabeledList(vec![
            LabeledText::new(
                "Diagnóstico em 30 min",
                "Checklist guiado para mapear dados críticos.",
            ),
            LabeledText::new(
                "IA + consultor",
                "Modelos generativos produzem scripts e insights imediatos.",
            ),
            LabeledText::new(
                "Storytelling executivo",
                "Resumo em 3 telas ligando causa → impacto → ação.",
            ),
            LabeledText::new(
                "Plano acionável",
                "Backlog priorizado com donos, métricas e prazos.",
            ),
        ]),
        ContentBlock::Chips(strings(&[
            "Briefing + checklist de dados",
            "Análise IA + validação consultor",
            "Workshop de insights & plano",
        ])),
        ContentBlock::Heading("Vantagens da IA".to_string()),
        ContentBlock::LabeledList(vec![
            LabeledText::new("Velocidade", "Análises em minutos, não em dias"),
            LabeledText::new(
                "Automação",
                "Tarefas repetitivas executadas automaticamente",
            ),
            LabeledText::new(
                "Inteligência",
                "Identificação de padrões invisíveis ao olho humano",
            ),
            LabeledText::new(
                "Escalabilidade",
                "Processar milhares de dados simultaneamente",
            ),
            LabeledText::new("Precisão", "Redução drástica de erros humanos"),
        ]),
        ContentBlock::Heading("Consultor do Futuro".to_string()),
        ContentBlock::LabeledList(vec![
            LabeledText::new(
                "Pensamento Analítico",
                "Interpretar dados com contexto de negócio",
            ),
            LabeledText::new(
                "Domínio de Ferramentas",
                "Python, Power BI, Canva, Overleaf",
            ),
            LabeledText::new("Uso Estratégico de IA", "Saber quando e como usar IA"),
            LabeledText::new("Comunicação Clara", "Traduzir dados em histórias"),
            LabeledText::new("Visão de Negócio", "Conectar análise com resultados"),
        ]),
        ContentBlock::Callout(
            "Se você tivesse uma IA na sua equipe, o que pediria para ela fazer por você?"
                .to_string(),
        ),
    ])
    .title("💼 Mini-Consultoria com IA")
}

fn summary_slide() -> Slide {
    Slide::new(
        SUMMARY_STEPS
            .iter()
            .enumerate()
            .map(|(slot, step)| {
                let mut lines = vec![CardLine::Text(step.focus.to_string())];
                lines.extend(bullets(step.bullets));
                ContentBlock::Card(Card::new(step.title, lines).staged(slot))
            })
            .collect(),
    )
    .title(TAGLINE)
    .subtitle("Os três pilares que guiamos em cada projeto para gerar impacto real")
}

fn workflow_slide(stage: &WorkflowStage) -> Slide {
    let mut content = vec![ContentBlock::Chips(strings(stage.chips))];
    content.extend(stage.cards.iter().enumerate().map(|(slot, card)| {
        let lines = match &card.body {
            WorkflowCardBody::List(items) => bullets(items),
            WorkflowCardBody::Paragraphs(paragraphs) => paragraphs
                .iter()
                .map(|(label, text)| CardLine::Labeled(LabeledText::new(*label, *text)))
                .collect(),
            WorkflowCardBody::Text(text) => vec![CardLine::Text((*text).to_string())],
        };
        ContentBlock::Card(Card::new(card.title, lines).staged(slot))
    }));
    content.push(ContentBlock::Kpis(
        stage
            .kpis
            .iter()
            .map(|(value, label)| Kpi::new(*value, *label))
            .collect(),
    ));

    Slide::new(content)
        .title(stage.title)
        .subtitle(format!("{} • {TAGLINE}", stage.tag))
}

fn challenge_slide() -> Slide {
    Slide::new(vec![
        ContentBlock::Card(Card::new(
            "📋 Consultoria com IA na Prática",
            vec![
                CardLine::Labeled(LabeledText::new("Prazo", "Segunda-feira, 23h59")),
                CardLine::Labeled(LabeledText::new(
                    "Entrega",
                    "Link do relatório + planilha/notebook",
                )),
            ],
        )),
        ContentBlock::Bullets(strings(&[
            "Coleta e limpeza de dados (planilha pública)",
            "Análise com ChatGPT/Gemini (2-3 insights)",
            "Visualização (gráfico ou dashboard)",
            "Relatório final de 1 página",
            "Envio do link público + arquivos",
        ])),
        ContentBlock::QrCode {
            url: CHALLENGE_DRIVE_URL.to_string(),
            caption: "Materiais do desafio disponíveis no Drive:".to_string(),
        },
    ])
    .title("🏆 Desafio Final")
}

fn evaluation_slide() -> Slide {
    Slide::new(vec![
        ContentBlock::Table {
            header: strings(&["Critério", "Descrição", "Peso"]),
            rows: EVALUATION_CRITERIA
                .iter()
                .map(|c| strings(&[c.criteria, c.description, c.weight]))
                .collect(),
        },
        ContentBlock::Callout(
            "Os melhores projetos serão convidados para entrevista de estágio!".to_string(),
        ),
    ])
    .title("📊 Critérios de Avaliação")
}

fn platforms_slide() -> Slide {
    Slide::new(
        PLATFORMS
            .iter()
            .enumerate()
            .map(|(slot, platform)| {
                ContentBlock::Card(
                    Card::new(
                        platform.name,
                        vec![
                            CardLine::Labeled(LabeledText::new(
                                format!("[{}]", platform.icon),
                                platform.tagline,
                            )),
                            CardLine::Text(platform.description.to_string()),
                            CardLine::Labeled(LabeledText::new("Saiba mais", platform.url)),
                        ],
                    )
                    .staged(slot),
                )
            })
            .collect(),
    )
    .title("Nossas Plataformas")
    .subtitle("Desenvolvemos soluções digitais completas para operação comercial e financeira")
}

fn closing_slide() -> Slide {
    Slide::new(vec![
        ContentBlock::Heading("Próximos Passos".to_string()),
        ContentBlock::Bullets(strings(&[
            "Acesse os materiais do curso",
            "Comece seu projeto do desafio",
            "Tire dúvidas durante a semana",
            "Entregue até segunda-feira, 23h59",
        ])),
        ContentBlock::Callout("Boa sorte! 🎯".to_string()),
    ])
    .title("🚀 Vamos Começar!")
    .subtitle("O futuro da consultoria está em suas mãos")
    .centered()
}
