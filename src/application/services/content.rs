//! Static content tables of the deck.

pub struct TeamMember {
    pub name: &'static str,
    pub role_line1: &'static str,
    pub role_line2: Option<&'static str>,
    pub description: &'static str,
    pub summary: Option<&'static str>,
    pub image: Option<&'static str>,
}

pub enum WorkflowCardBody {
    List(&'static [&'static str]),
    Paragraphs(&'static [(&'static str, &'static str)]),
    Text(&'static str),
}

pub struct WorkflowCard {
    pub title: &'static str,
    pub body: WorkflowCardBody,
}

pub struct WorkflowStage {
    pub tag: &'static str,
    pub title: &'static str,
    pub chips: &'static [&'static str],
    pub cards: &'static [WorkflowCard],
    pub kpis: &'static [(&'static str, &'static str)],
}

pub struct FundamentalsCard {
    pub title: &'static str,
    pub bullets: &'static [&'static str],
    pub footer: Option<(&'static str, &'static str)>,
}

pub struct SummaryStep {
    pub title: &'static str,
    pub focus: &'static str,
    pub bullets: &'static [&'static str],
}

pub struct EvaluationCriterion {
    pub criteria: &'static str,
    pub description: &'static str,
    pub weight: &'static str,
}

pub struct Platform {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

pub const TAGLINE: &str = "IA • Consultoria • Crescer";
pub const CHALLENGE_DRIVE_URL: &str =
    "https://drive.google.com/drive/folders/1myjdm0734NPdu8_LxlZ4PkVFIVNNEcWR?usp=drive_link";
pub const MINI_CONSULTANCY_VIDEO_URL: &str = "https://www.youtube.com/embed/p6bUXxuGoZY";

pub const TEAM_MEMBERS: &[TeamMember] = &[
    TeamMember {
        name: "Diogo Albuquerque",
        role_line1: "Fundador",
        role_line2: Some("Consultor Senior"),
        description: "Doutorando em Economia pela Universidade Federal da Paraíba e professor da Universidade Estadual de Montes Claros. Possui mais de 10 anos de experiência em finanças corporativas, consultoria e análise de dados.",
        summary: Some(
            "Economista, doutorando na UFPB e professor na Unimontes. Especialista em finanças corporativas e planejamento estratégico.",
        ),
        image: Some("diogo.png"),
    },
    TeamMember {
        name: "Diego Fróes",
        role_line1: "Fundador",
        role_line2: Some("Consultor Senior"),
        description: "Formado em Administração e Ciências Econômicas pela Universidade Estadual de Montes Claros.",
        summary: Some(
            "Administrador e economista pela Unimontes, atua com planejamento estratégico, finanças e marketing de crescimento.",
        ),
        image: Some("Diego.png"),
    },
    TeamMember {
        name: "Luiz Eduardo",
        role_line1: "Sócio",
        role_line2: Some("Consultor"),
        description: "Graduando em Ciências Contábeis pela Universidade Estadual de Montes Claros.",
        summary: Some(
            "Graduando em Ciências Contábeis (Unimontes) com foco em eficiência operacional e gestão de rotinas empresariais.",
        ),
        image: Some("Luis.png"),
    },
    TeamMember {
        name: "Lucas Soares",
        role_line1: "Sócio",
        role_line2: Some("Desenvolvedor"),
        description: "Graduando em Sistemas de Informação e em Análise e Desenvolvimento de Sistemas. Certificado pela AWS.",
        summary: Some(
            "Desenvolvedor full stack, graduando em SI/ADS e certificado AWS. Experiência com Java, React, Python e arquitetura cloud.",
        ),
        image: Some("Lucas.png"),
    },
    TeamMember {
        name: "João Pedro",
        role_line1: "Trainee",
        role_line2: None,
        description: "Graduando em Ciências Econômicas pela Universidade Estadual de Montes Claros.",
        summary: Some(
            "Graduando em Ciências Econômicas na Unimontes, apoia análises e operações de projetos com foco em dados.",
        ),
        image: Some("joao.png"),
    },
    TeamMember {
        name: "Henrique Fernandes",
        role_line1: "Estagiário",
        role_line2: None,
        description: "Graduando em Ciências Contábeis pela Universidade Estadual de Montes Claros.",
        summary: Some(
            "Graduando em Ciências Contábeis (Unimontes), responsável por suporte financeiro e rotinas administrativas.",
        ),
        image: Some("henrique.png"),
    },
];

const WHY_IT_MATTERS: &str = "Por que importa";
const INPUTS_OUTPUTS: &str = "Entradas & Saídas";
const SUGGESTED_TOOLS: &str = "Ferramentas sugeridas";
const QUALITY_CRITERIA: &str = "Critérios de qualidade";

pub const WORKFLOW_STAGES: &[WorkflowStage] = &[
    WorkflowStage {
        tag: "Etapa 1",
        title: "Tratamento de Dados",
        chips: &["Coleta", "Padronização", "Validação", "ETL"],
        cards: &[
            WorkflowCard {
                title: WHY_IT_MATTERS,
                body: WorkflowCardBody::List(&[
                    "Evita decisões baseadas em dados sujos ou incompletos.",
                    "Cria um dataset confiável para as próximas etapas.",
                ]),
            },
            WorkflowCard {
                title: INPUTS_OUTPUTS,
                body: WorkflowCardBody::Paragraphs(&[
                    ("Entradas", "Planilhas, ERP, bancos, APIs."),
                    (
                        "Saídas",
                        "Tabelas limpas (camada gold) e dicionário de dados.",
                    ),
                ]),
            },
            WorkflowCard {
                title: SUGGESTED_TOOLS,
                body: WorkflowCardBody::Text(
                    "Python (pandas), Google Sheets, conectores (DB/API), dbt/ETL.",
                ),
            },
            WorkflowCard {
                title: QUALITY_CRITERIA,
                body: WorkflowCardBody::List(&[
                    "Sem duplicidades; datas e moedas normalizadas.",
                    "Regras de negócio aplicadas e auditáveis.",
                ]),
            },
        ],
        kpis: &[
            ("< 1%", "Dados faltantes"),
            ("100%", "Tipos padronizados"),
            ("T+1", "Atualização"),
        ],
    },
    WorkflowStage {
        tag: "Etapa 2",
        title: "Análise",
        chips: &["Exploratória", "Modelos", "KPIs", "Validação"],
        cards: &[
            WorkflowCard {
                title: WHY_IT_MATTERS,
                body: WorkflowCardBody::List(&[
                    "Transforma dados em insights acionáveis.",
                    "Quantifica impacto e prioriza iniciativas.",
                ]),
            },
            WorkflowCard {
                title: INPUTS_OUTPUTS,
                body: WorkflowCardBody::Paragraphs(&[
                    ("Entradas", "Camada gold tratada."),
                    ("Saídas", "KPIs, testes A/B, segmentos e recomendações."),
                ]),
            },
            WorkflowCard {
                title: SUGGESTED_TOOLS,
                body: WorkflowCardBody::Text("Python (numpy/scikit), SQL, Jupyter, IA copilot."),
            },
            WorkflowCard {
                title: QUALITY_CRITERIA,
                body: WorkflowCardBody::List(&[
                    "Métricas reproduzíveis (queries/notebooks versionados).",
                    "Validação estatística e revisão por pares.",
                ]),
            },
        ],
        kpis: &[
            ("±5%", "Erro aceitável"),
            ("> 95%", "Cobertura de dados"),
            ("SLA 24h", "Revisão de resultados"),
        ],
    },
    WorkflowStage {
        tag: "Etapa 3",
        title: "Apresentação",
        chips: &["Storytelling", "Visualização", "Plano de ação", "Follow-up"],
        cards: &[
            WorkflowCard {
                title: WHY_IT_MATTERS,
                body: WorkflowCardBody::List(&[
                    "Garante entendimento do cliente e adesão ao plano.",
                    "Facilita decisões e compromissos com prazos.",
                ]),
            },
            WorkflowCard {
                title: INPUTS_OUTPUTS,
                body: WorkflowCardBody::Paragraphs(&[
                    ("Entradas", "Insights validados e KPIs."),
                    (
                        "Saídas",
                        "Dashboard/relatório, trilha de ações e próximos passos.",
                    ),
                ]),
            },
            WorkflowCard {
                title: SUGGESTED_TOOLS,
                body: WorkflowCardBody::Text(
                    "Power BI / Looker, Overleaf, Canva, Lovely Charts, slides.",
                ),
            },
            WorkflowCard {
                title: QUALITY_CRITERIA,
                body: WorkflowCardBody::List(&[
                    "História clara com 3–5 achados principais.",
                    "Planos SMART (responsável, prazo, métrica).",
                ]),
            },
        ],
        kpis: &[
            ("< 10 min", "Tempo para entender"),
            ("3–5", "Recomendações"),
            ("D+7", "Follow-up"),
        ],
    },
];

pub const FUNDAMENTALS_CARDS: &[FundamentalsCard] = &[
    FundamentalsCard {
        title: "Objetivos do Curso",
        bullets: &[
            "Compreender o impacto da IA na consultoria moderna",
            "Dominar ferramentas de análise de dados com IA",
            "Aplicar IA em projetos reais de consultoria",
            "Desenvolver habilidades do consultor do futuro",
        ],
        footer: Some((
            "💡 Meta",
            "Você deve ter as noções básicas de como usar a IA para analisar dados e criar relatórios de consultoria.",
        )),
    },
    FundamentalsCard {
        title: "Essência da Consultoria",
        bullets: &[
            "Resolver problemas complexos de negócios",
            "Entregar valor mensurável aos clientes",
            "Transformar dados em insights acionáveis",
            "Recomendar estratégias baseadas em evidências",
        ],
        footer: Some((
            "🎯 Objetivo Final",
            "Ajudar empresas a crescerem de forma sustentável e inteligente.",
        )),
    },
    FundamentalsCard {
        title: "Limitações do Modelo Tradicional",
        bullets: &[
            "Análise manual de grandes volumes de dados",
            "Tempo excessivo em tarefas repetitivas",
            "Dificuldade em identificar padrões complexos",
            "Relatórios demorados e propensos a erros",
            "Custo elevado de projetos de consultoria",
        ],
        footer: Some((
            "💭 Reflexão",
            "E se pudéssemos automatizar 70% dessas tarefas e focar no que realmente importa?",
        )),
    },
];

pub const SUMMARY_STEPS: &[SummaryStep] = &[
    SummaryStep {
        title: "IA",
        focus: "Automação inteligente",
        bullets: &[
            "Geração de código, insights e relatórios em minutos",
            "Monitoramento contínuo com modelos e copilotos",
            "Suporte 24/7 em canais digitais",
        ],
    },
    SummaryStep {
        title: "Consultoria",
        focus: "Método & estratégia",
        bullets: &[
            "Definição de hipóteses e indicadores críticos",
            "Validação com dados confiáveis e benchmarks",
            "Recomendações priorizadas por impacto",
        ],
    },
    SummaryStep {
        title: "Crescer",
        focus: "Execução com propósito",
        bullets: &[
            "Planos acionáveis com responsáveis e prazos",
            "Acompanhamento de resultados e aprendizado",
            "Parceria contínua para evolução do cliente",
        ],
    },
];

pub const EVALUATION_CRITERIA: &[EvaluationCriterion] = &[
    EvaluationCriterion {
        criteria: "Clareza da análise",
        description: "Entendimento e explicação dos dados",
        weight: "30%",
    },
    EvaluationCriterion {
        criteria: "Uso de IA",
        description: "Criatividade e produtividade com IA",
        weight: "25%",
    },
    EvaluationCriterion {
        criteria: "Visualização",
        description: "Clareza e estética dos gráficos",
        weight: "20%",
    },
    EvaluationCriterion {
        criteria: "Recomendações",
        description: "Soluções práticas e aplicáveis",
        weight: "15%",
    },
    EvaluationCriterion {
        criteria: "Organização",
        description: "Estrutura e entrega no prazo",
        weight: "10%",
    },
];

pub const PLATFORMS: &[Platform] = &[
    Platform {
        name: "CrescerZap",
        tagline: "Transforme seu WhatsApp em uma máquina de vendas inteligente",
        description: "Atendimento automatizado 24/7 que identifica demandas, qualifica oportunidades e evita perda de leads.",
        url: "https://zap.crescer.emp.br",
        icon: "zap.png",
    },
    Platform {
        name: "CrescerFlow",
        tagline: "Sua gestão financeira sem planilhas caóticas ou papelada",
        description: "Controle de fluxo de caixa, conciliação e relatórios em um só lugar.",
        url: "https://flow.crescer.emp.br",
        icon: "flow.png",
    },
];
